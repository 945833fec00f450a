// Job recommendations: per-candidate match scoring, ranking and the HTTP handler.
// Scoring and ranking are pure; all I/O lives in handlers.rs.

pub mod handlers;
pub mod ranking;
pub mod scorer;
