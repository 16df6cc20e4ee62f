//! Filesystem storage for uploads and the rendered letter.
//!
//! One well-known output file, overwritten on every run. Concurrent runs
//! race on it and the last writer wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::letters::pipeline::UploadedDocument;

#[derive(Debug, Clone)]
pub struct LetterStore {
    upload_dir: PathBuf,
    letter_path: PathBuf,
}

impl LetterStore {
    /// Creates the store, making both directories if they are missing.
    pub fn new(
        upload_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        letter_filename: &str,
    ) -> Result<Self> {
        let upload_dir = upload_dir.into();
        let output_dir = output_dir.into();
        fs::create_dir_all(&upload_dir)
            .with_context(|| format!("Failed to create upload dir {}", upload_dir.display()))?;
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;
        Ok(Self {
            upload_dir,
            letter_path: output_dir.join(letter_filename),
        })
    }

    /// Persists an upload under its client-supplied filename.
    /// Path components in the name are dropped — only the final component
    /// is used, so uploads cannot escape the upload directory.
    pub fn save_upload(&self, document: &UploadedDocument) -> Result<PathBuf> {
        let path = self.upload_dir.join(sanitize_filename(&document.filename));
        fs::write(&path, &document.bytes)
            .with_context(|| format!("Failed to save upload {}", path.display()))?;
        debug!("Saved upload to {}", path.display());
        Ok(path)
    }

    /// Overwrites the letter file with freshly rendered bytes.
    pub fn save_letter(&self, pdf: &[u8]) -> Result<PathBuf> {
        fs::write(&self.letter_path, pdf)
            .with_context(|| format!("Failed to write {}", self.letter_path.display()))?;
        debug!("Wrote letter to {}", self.letter_path.display());
        Ok(self.letter_path.clone())
    }

    /// Reads the letter file back for download.
    pub fn read_letter(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.letter_path)
    }

    pub fn letter_path(&self) -> &Path {
        &self.letter_path
    }
}

/// Keeps only the final path component of a client-supplied filename,
/// falling back to a fixed name when nothing usable remains.
fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if base.is_empty() {
        "upload".to_string()
    } else {
        base
    }
}
