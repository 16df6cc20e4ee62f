//! Cover-letter pipeline — orchestrates the full generation flow.
//!
//! Flow: extract(cv) → extract(jd) → build prompt → generate → render.
//! Each stage returns a typed result; the degrade policy lives here and
//! only here. A failed extraction becomes empty text, a failed generation
//! becomes the fixed sentinel text, and in both cases the run continues.
//! A failed render is surfaced to the caller: the PDF is the product of
//! the run, so a blank success would hide a real loss.

use bytes::Bytes;
use tracing::{error, info, warn};

use crate::extract::{extract, DocumentFormat};
use crate::letters::prompts::build_prompt;
use crate::llm_client::TextGenerator;
use crate::render::{render_letter, LayoutConfig, RenderError};

/// Substituted for the letter body when the generation call fails.
pub const GENERATION_FAILED_TEXT: &str = "Error generating text.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One uploaded document: the client-supplied filename plus its bytes.
/// The filename decides the extraction path.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Output of one pipeline run.
#[derive(Debug)]
pub struct LetterOutput {
    /// The aggregated letter text, returned to the caller for display.
    pub cover_letter: String,
    /// The rendered PDF bytes.
    pub pdf: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline for one pair of uploads.
///
/// Steps:
/// 1. extract both documents (failure degrades to empty text)
/// 2. build the fixed prompt
/// 3. generate (failure degrades to the sentinel text)
/// 4. render the letter PDF (failure is returned)
pub async fn run_pipeline(
    generator: &dyn TextGenerator,
    layout: &LayoutConfig,
    cv: &UploadedDocument,
    job_description: &UploadedDocument,
) -> Result<LetterOutput, RenderError> {
    let cv_text = extract_or_empty(cv);
    let jd_text = extract_or_empty(job_description);

    let prompt = build_prompt(&cv_text, &jd_text);
    info!("Prompt assembled: {} chars", prompt.len());

    let cover_letter = match generator.generate(&prompt).await {
        Ok(text) => {
            info!("Generation complete: {} chars", text.len());
            text
        }
        Err(e) => {
            error!("Generation failed: {e}");
            GENERATION_FAILED_TEXT.to_string()
        }
    };

    let pdf = render_letter(&cover_letter, layout)?;
    info!("Rendered letter PDF: {} bytes", pdf.len());

    Ok(LetterOutput { cover_letter, pdf })
}

/// Extraction failures degrade to empty text so the run continues with
/// whatever the other document provides.
fn extract_or_empty(document: &UploadedDocument) -> String {
    let format = DocumentFormat::from_filename(&document.filename);
    match extract(&document.bytes, format) {
        Ok(text) => text,
        Err(e) => {
            warn!("Extraction failed for {}: {e}", document.filename);
            String::new()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
