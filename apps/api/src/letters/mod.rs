// Cover-letter API.
// Implements: multipart intake, the extract → prompt → generate → render
// pipeline, and retrieval of the rendered PDF.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
