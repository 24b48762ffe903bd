use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Screening is stateless per request, so this carries only
/// configuration — no pools, no clients, no cross-request caches.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
