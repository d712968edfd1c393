use crate::diagnostics::Diagnostic;
use crate::model::ExtractOutcome;
use crate::parsing;

/// Build one combined ledger from uploaded documents.
///
/// Documents are processed in upload order and their records concatenated,
/// so overall order is document order, then line order within a document.
/// A document whose framing cannot be located contributes a
/// `MalformedDocument` diagnostic and is skipped whole; a line that fails
/// to parse contributes a `LineParseFailure`. Neither aborts the batch.
pub fn build(documents: &[String]) -> ExtractOutcome {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();

    for (document_index, text) in documents.iter().enumerate() {
        match parsing::parse_document(text) {
            Ok((mut recs, failures)) => {
                records.append(&mut recs);
                diagnostics.extend(failures.into_iter().map(|f| Diagnostic::LineParseFailure {
                    document_index,
                    line_number: f.line_number,
                    line: f.line,
                    reason: f.reason,
                }));
            }
            Err(err) => diagnostics.push(Diagnostic::MalformedDocument {
                document_index,
                reason: err.to_string(),
            }),
        }
    }

    ExtractOutcome {
        records,
        diagnostics,
    }
}
