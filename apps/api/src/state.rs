use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::render::LayoutConfig;
use crate::storage::LetterStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text generator. Production wires an `OllamaClient`;
    /// tests substitute canned implementations.
    pub generator: Arc<dyn TextGenerator>,
    pub store: LetterStore,
    /// Layout config — font metrics scale and page dimensions for the
    /// wrap/paginate pass. Defaults to Helvetica at 12pt on US letter.
    pub layout: LayoutConfig,
}
