use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion endpoint. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionBackend>,
}
