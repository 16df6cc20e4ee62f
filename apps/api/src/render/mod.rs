// Paginated letter rendering.
// Implements: Helvetica width measurement, greedy word-wrap, page-break
// bookkeeping, and deterministic PDF serialization.

pub mod font_metrics;
pub mod layout;
pub mod writer;

// Re-export the public API consumed by other modules (pipeline, handlers).
pub use font_metrics::{helvetica, LayoutConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Lays `text` out into fixed-size pages and serializes them to PDF bytes.
pub fn render_letter(text: &str, config: &LayoutConfig) -> Result<Vec<u8>, RenderError> {
    let pages = layout::paginate(text, helvetica(), config);
    writer::write_pdf(&pages, config)
}
