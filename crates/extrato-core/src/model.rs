use crate::diagnostics::Diagnostic;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One transaction recovered from a statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Statement month (1-12), the second component of the line's leading
    /// `day.month` token. The day component is not retained.
    pub period: u32,
    /// Short code, the first word of the recovered description field.
    pub trx_type: String,
    /// Free-text remainder, noise-stripped and whitespace-collapsed.
    pub description: String,
    pub amount: Decimal,
}

/// Combined ledger across all uploaded documents, in upload order.
pub type Ledger = Vec<TransactionRecord>;

/// A transaction with its resolved spending category, if any.
///
/// Produced by a left join: a record with no matching category rule keeps
/// `category: None` and is never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub period: u32,
    pub trx_type: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EnrichedRecord {
    pub fn new(record: &TransactionRecord, category: Option<String>) -> Self {
        EnrichedRecord {
            period: record.period,
            trx_type: record.trx_type.clone(),
            description: record.description.clone(),
            amount: record.amount,
            category,
        }
    }
}

/// One row from the external category lookup source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRow {
    pub description: String,
    pub category: String,
    pub count: u64,
}

/// Winning category for one distinct normalized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Normalized description, the join key against ledger records.
    pub description: String,
    pub category: String,
    /// Summed observation count backing this rule.
    pub count: u64,
}

/// Parse-only extraction outcome: best-effort ledger plus everything that
/// had to be skipped to produce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOutcome {
    pub records: Ledger,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Full ingestion outcome: category-enriched ledger plus diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub records: Vec<EnrichedRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}
