use crate::affinda_client::AffindaClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub affinda: AffindaClient,
}
