use crate::error::ExtratoError;
use crate::extraction::PageTextExtractor;
use std::io::Write;
use std::process::Command;

/// Extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so the statement table keeps its whitespace
/// alignment when flattened to text.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextExtractor for PdftotextExtractor {
    fn extract_pages(&self, document_bytes: &[u8]) -> Result<Vec<String>, ExtratoError> {
        // Write document bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ExtratoError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(document_bytes)
            .map_err(|e| ExtratoError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtratoError::PdftotextNotFound
                } else {
                    ExtratoError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ExtratoError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // Split into pages (pdftotext uses form feed \x0c as page separator)
        let pages: Vec<String> = text
            .split('\x0c')
            .map(|p| p.to_string())
            .filter(|p| !p.trim().is_empty())
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
