use std::sync::Arc;

use crate::config::Config;
use crate::document::PageRenderer;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Hosted model backend. Default: the Gemini `LlmClient`.
    pub model: Arc<dyn GenerativeModel>,
    /// First-page rasterizer. Default: `PdfiumRenderer`.
    pub renderer: Arc<dyn PageRenderer>,
    pub config: Config,
}
