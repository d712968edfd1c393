pub mod line;
pub mod normalize;
pub mod tokenize;

use crate::diagnostics::ParseFailureReason;
use crate::error::ExtratoError;
use crate::model::TransactionRecord;

/// One rejected data line, with its position and original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub line_number: usize,
    pub line: String,
    pub reason: ParseFailureReason,
}

/// Parse one document's flattened text into transaction records.
///
/// Blank lines are layout artifacts and skipped silently; any other line
/// that fails to parse is excluded and reported, never aborting the
/// document. Framing problems reject the document as a whole.
pub fn parse_document(
    text: &str,
) -> Result<(Vec<TransactionRecord>, Vec<LineFailure>), ExtratoError> {
    let lines = tokenize::tokenize(text)?;

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (line_number, raw) in lines.iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match line::parse_line(raw) {
            Ok(record) => records.push(record),
            Err(reason) => failures.push(LineFailure {
                line_number,
                line: raw.clone(),
                reason,
            }),
        }
    }

    Ok((records, failures))
}
