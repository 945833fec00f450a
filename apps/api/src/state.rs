use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::AuthConfig;
use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable match scorer. Default: SubstringMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        AuthConfig {
            secret: state.config.secret_key.clone(),
        }
    }
}
