pub mod extract;
pub mod ingest;
pub mod rules;

use crate::cache::ExtractionCache;
use extrato_core::error::ExtratoError;
use extrato_core::extraction::pdftotext::PdftotextExtractor;
use extrato_core::extraction::{concat_pages, PageTextExtractor};
use std::path::{Path, PathBuf};

/// Load each statement file as flat document text, in upload order.
///
/// `.txt` files are taken as pre-extracted text; anything else goes
/// through the pdftotext backend, with an optional content-addressed cache
/// in front of it.
pub fn load_documents(
    files: &[PathBuf],
    cache_dir: Option<PathBuf>,
) -> Result<Vec<String>, ExtratoError> {
    let cache = match cache_dir {
        Some(dir) => Some(ExtractionCache::new(dir)?),
        None => None,
    };
    let extractor = PdftotextExtractor::new();

    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        if is_text_file(file) {
            texts.push(std::fs::read_to_string(file)?);
            continue;
        }

        let bytes = std::fs::read(file)?;
        let pages = match cache.as_ref().and_then(|c| c.get(&bytes)) {
            Some(pages) => pages,
            None => {
                let pages = extractor.extract_pages(&bytes)?;
                if let Some(c) = &cache {
                    c.put(&bytes, &pages)?;
                }
                pages
            }
        };
        texts.push(concat_pages(&pages));
    }

    Ok(texts)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
