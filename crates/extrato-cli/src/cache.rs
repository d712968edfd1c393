use extrato_core::error::ExtratoError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Content-addressed store for extracted page text, keyed by the SHA-256
/// of the document bytes. Sits in front of the extraction backend only;
/// the parsing core never sees it.
pub struct ExtractionCache {
    dir: PathBuf,
}

impl ExtractionCache {
    pub fn new(dir: PathBuf) -> Result<Self, ExtratoError> {
        fs::create_dir_all(&dir)?;
        Ok(ExtractionCache { dir })
    }

    fn entry_path(&self, document_bytes: &[u8]) -> PathBuf {
        let digest = Sha256::digest(document_bytes);
        let key: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        self.dir.join(format!("{key}.json"))
    }

    /// Cached pages for these bytes, if present and readable. Unreadable
    /// entries fall through to re-extraction.
    pub fn get(&self, document_bytes: &[u8]) -> Option<Vec<String>> {
        let data = fs::read(self.entry_path(document_bytes)).ok()?;
        serde_json::from_slice(&data).ok()
    }

    pub fn put(&self, document_bytes: &[u8], pages: &[String]) -> Result<(), ExtratoError> {
        let json = serde_json::to_vec(pages)?;
        fs::write(self.entry_path(document_bytes), json)?;
        Ok(())
    }
}
