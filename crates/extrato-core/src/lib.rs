pub mod categorize;
pub mod diagnostics;
pub mod error;
pub mod extraction;
pub mod ledger;
pub mod model;
pub mod parsing;
pub mod report;

use error::ExtratoError;
use extraction::PageTextExtractor;
use model::{ExtractOutcome, IngestOutcome, LookupRow};

/// Main API entry point: rebuild the enriched ledger from pre-extracted
/// document texts and category lookup rows.
///
/// Never fails as a whole: malformed documents and unparseable lines are
/// collected as diagnostics alongside the best-effort ledger, and records
/// without a category match are kept with `category: None`.
pub fn ingest(document_texts: &[String], lookup_rows: &[LookupRow]) -> IngestOutcome {
    let extracted = ledger::build(document_texts);
    let rules = categorize::resolve_rules(lookup_rows);
    let records = categorize::enrich(&extracted.records, &rules);

    IngestOutcome {
        records,
        diagnostics: extracted.diagnostics,
    }
}

/// Parse-only entry point: combined ledger plus diagnostics, no category
/// join.
pub fn extract_ledger(document_texts: &[String]) -> ExtractOutcome {
    ledger::build(document_texts)
}

/// Convenience over raw document bytes: run the extraction backend on each
/// document, then ingest.
///
/// A failing extraction backend is a hard error; malformed document
/// content is reported through diagnostics instead.
pub fn ingest_documents(
    documents: &[Vec<u8>],
    extractor: &dyn PageTextExtractor,
    lookup_rows: &[LookupRow],
) -> Result<IngestOutcome, ExtratoError> {
    let mut texts = Vec::with_capacity(documents.len());
    for bytes in documents {
        let pages = extractor.extract_pages(bytes)?;
        texts.push(extraction::concat_pages(&pages));
    }
    Ok(ingest(&texts, lookup_rows))
}
