use crate::model::EnrichedRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total spend for one (period, category) cell of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPeriodTotal {
    pub period: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub total: Decimal,
    pub count: usize,
}

/// Group the enriched ledger by period and category for display.
///
/// Rows come out ordered by period, then category name, with uncategorized
/// records last within each period.
pub fn summarize(records: &[EnrichedRecord]) -> Vec<CategoryPeriodTotal> {
    let mut cells: BTreeMap<(u32, bool, String), (Decimal, usize)> = BTreeMap::new();

    for record in records {
        let key = match &record.category {
            Some(category) => (record.period, false, category.clone()),
            None => (record.period, true, String::new()),
        };
        let cell = cells.entry(key).or_insert((Decimal::ZERO, 0));
        cell.0 += record.amount;
        cell.1 += 1;
    }

    cells
        .into_iter()
        .map(
            |((period, uncategorized, name), (total, count))| CategoryPeriodTotal {
                period,
                category: if uncategorized { None } else { Some(name) },
                total,
                count,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn enriched(period: u32, amount: Decimal, category: Option<&str>) -> EnrichedRecord {
        EnrichedRecord {
            period,
            trx_type: "COMPRA".into(),
            description: "LOJA".into(),
            amount,
            category: category.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_totals_grouped_by_period_and_category() {
        let rows = summarize(&[
            enriched(3, dec!(10.00), Some("Alimentacao")),
            enriched(3, dec!(5.50), Some("Alimentacao")),
            enriched(3, dec!(20.00), Some("Transporte")),
            enriched(4, dec!(7.00), Some("Alimentacao")),
        ]);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].period, 3);
        assert_eq!(rows[0].category.as_deref(), Some("Alimentacao"));
        assert_eq!(rows[0].total, dec!(15.50));
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].category.as_deref(), Some("Transporte"));
        assert_eq!(rows[2].period, 4);
    }

    #[test]
    fn test_uncategorized_sorts_last_within_period() {
        let rows = summarize(&[
            enriched(3, dec!(1.00), None),
            enriched(3, dec!(2.00), Some("Lazer")),
        ]);

        assert_eq!(rows[0].category.as_deref(), Some("Lazer"));
        assert_eq!(rows[1].category, None);
        assert_eq!(rows[1].total, dec!(1.00));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(summarize(&[]).is_empty());
    }
}
