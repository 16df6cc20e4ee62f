//! Plain-text extraction from uploaded documents.
//!
//! The upload's filename decides the path: `.pdf` goes through `pdf-extract`
//! (page texts concatenated in page order), everything else is decoded as
//! UTF-8. Failures are typed — the pipeline decides whether to degrade or
//! abort.

use thiserror::Error;

/// Declared format of an uploaded document, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// A `.pdf` extension (ASCII case-insensitive) selects PDF extraction;
    /// any other filename is read as plain text.
    pub fn from_filename(filename: &str) -> Self {
        if filename.to_ascii_lowercase().ends_with(".pdf") {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::PlainText
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("text upload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Extracts the textual content of an uploaded document.
pub fn extract(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DocumentFormat::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
    }
}
