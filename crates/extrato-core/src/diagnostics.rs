use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a single line was rejected by the transaction parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ParseFailureReason {
    /// The line does not match the two-anchor shape, so no description
    /// field could be recovered.
    DescriptionNotRecovered,
    /// A date token was found but its components are not usable numbers.
    UnparsedDate(String),
    /// An amount token was found but does not parse as a decimal.
    UnparsedAmount(String),
    /// The month component of the date token is outside 1-12.
    PeriodOutOfRange(u32),
}

impl fmt::Display for ParseFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailureReason::DescriptionNotRecovered => {
                write!(f, "line does not match the transaction shape")
            }
            ParseFailureReason::UnparsedDate(token) => {
                write!(f, "unparsed date token '{token}'")
            }
            ParseFailureReason::UnparsedAmount(token) => {
                write!(f, "unparsed amount token '{token}'")
            }
            ParseFailureReason::PeriodOutOfRange(period) => {
                write!(f, "period {period} outside 1-12")
            }
        }
    }
}

/// One problem encountered while building the ledger.
///
/// Diagnostics are collected, never thrown: the caller always gets the
/// best-effort ledger together with the full list, and every dropped line
/// is explainable from it. `line_number` indexes the tokenized data lines
/// of the document, where 0 is the merged first row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Diagnostic {
    /// The document's framing anchors are missing or too little text
    /// remains after trimming them. The whole document is skipped.
    MalformedDocument {
        document_index: usize,
        reason: String,
    },
    /// A single data line was excluded from the ledger.
    LineParseFailure {
        document_index: usize,
        line_number: usize,
        line: String,
        reason: ParseFailureReason,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedDocument {
                document_index,
                reason,
            } => write!(f, "document {document_index}: {reason}"),
            Diagnostic::LineParseFailure {
                document_index,
                line_number,
                line,
                reason,
            } => write!(
                f,
                "document {document_index}, line {line_number}: {reason} in '{line}'"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_failure_display_includes_original_text() {
        let d = Diagnostic::LineParseFailure {
            document_index: 0,
            line_number: 3,
            line: "garbled row".into(),
            reason: ParseFailureReason::DescriptionNotRecovered,
        };
        let text = d.to_string();
        assert!(text.contains("line 3"));
        assert!(text.contains("garbled row"));
    }

    #[test]
    fn test_reason_serializes_tagged() {
        let json =
            serde_json::to_string(&ParseFailureReason::UnparsedAmount("12,50".into())).unwrap();
        assert!(json.contains("unparsed_amount"));
        assert!(json.contains("12,50"));
    }
}
