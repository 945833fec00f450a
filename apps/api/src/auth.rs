//! Request authentication.
//!
//! Tokens are issued elsewhere; this module only verifies them. A token is an
//! HS256 JWT carrying the user id in `userId`, sent either as the `token`
//! cookie or as `Authorization: Bearer <jwt>`.

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

const TOKEN_COOKIE: &str = "token";

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

/// The authenticated caller. Extracting it rejects the request with 401 when
/// no valid token is present.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: usize,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);
        let parts: &Parts = parts;

        let token = token_from_cookie(parts)
            .or_else(|| token_from_bearer(parts))
            .ok_or_else(|| {
                debug!("Rejected request without token");
                AppError::Unauthorized
            })?;

        verify_token(token, &config.secret)
    }
}

/// Decodes `token` and returns the caller it was issued for.
pub fn verify_token(token: &str, secret: &str) -> Result<AuthUser, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|err| {
        debug!("Rejected token: {err}");
        AppError::Unauthorized
    })?;

    let user_id = Uuid::parse_str(&data.claims.user_id).map_err(|_| {
        debug!("Token subject is not a user id");
        AppError::Unauthorized
    })?;

    Ok(AuthUser { user_id })
}

fn token_from_cookie(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}

fn token_from_bearer(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};

    pub(crate) const SECRET: &str = "test-secret";

    pub(crate) fn make_token(user_id: &str, secret: &str, exp_offset_secs: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as usize;
        let claims = Claims {
            user_id: user_id.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    async fn extract(request: Request<()>) -> Result<AuthUser, AppError> {
        let config = AuthConfig {
            secret: SECRET.to_string(),
        };
        let (mut parts, _) = request.into_parts();
        AuthUser::from_request_parts(&mut parts, &config).await
    }

    #[tokio::test]
    async fn test_cookie_token_accepted() {
        let user_id = Uuid::new_v4();
        let token = make_token(&user_id.to_string(), SECRET, 3600);
        let request = Request::builder()
            .header(COOKIE, format!("theme=dark; token={token}"))
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[tokio::test]
    async fn test_bearer_token_accepted() {
        let user_id = Uuid::new_v4();
        let token = make_token(&user_id.to_string(), SECRET, 3600);
        let request = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let request = Request::builder().body(()).unwrap();
        assert!(matches!(extract(request).await, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_empty_cookie_rejected() {
        let request = Request::builder()
            .header(COOKIE, "token=")
            .body(())
            .unwrap();
        assert!(matches!(extract(request).await, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = make_token(&Uuid::new_v4().to_string(), "other-secret", 3600);
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = make_token(&Uuid::new_v4().to_string(), SECRET, -3600);
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let token = make_token("64f1c2e5a1b2c3d4e5f60718", SECRET, 3600);
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AppError::Unauthorized)
        ));
    }
}
