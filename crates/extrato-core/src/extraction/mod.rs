pub mod pdftotext;

use crate::error::ExtratoError;

/// Trait for document text extraction backends.
pub trait PageTextExtractor: Send + Sync {
    /// Extract visible text from document bytes, one string per page.
    fn extract_pages(&self, document_bytes: &[u8]) -> Result<Vec<String>, ExtratoError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join page texts into the flat document text the tokenizer consumes.
pub fn concat_pages(pages: &[String]) -> String {
    pages.join("\n")
}
