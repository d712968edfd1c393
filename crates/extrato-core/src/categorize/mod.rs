use crate::model::{CategoryRule, EnrichedRecord, LookupRow, TransactionRecord};
use crate::parsing::normalize::normalize_description;
use std::collections::HashMap;

/// Build the one-rule-per-description table from raw lookup rows.
///
/// Lookup descriptions go through the same normalizer as transaction
/// descriptions; the join key must come from one function on both sides,
/// or rows differing only by embedded noise never match. Counts are summed
/// per (description, category) since normalization can merge such rows,
/// then the highest total wins, ties broken by first appearance in input
/// order. The result is independent of row processing order.
pub fn resolve_rules(rows: &[LookupRow]) -> Vec<CategoryRule> {
    // (normalized description, category) -> (summed count, first row index)
    let mut tallies: HashMap<(String, String), (u64, usize)> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        let key = (
            normalize_description(&row.description),
            row.category.clone(),
        );
        let tally = tallies.entry(key).or_insert((0, index));
        tally.0 += row.count;
    }

    // Keep rank 1 per description.
    let mut best: HashMap<String, (u64, usize, String)> = HashMap::new();
    for ((description, category), (count, first_index)) in tallies {
        let wins = match best.get(&description) {
            Some(&(top_count, top_index, _)) => {
                count > top_count || (count == top_count && first_index < top_index)
            }
            None => true,
        };
        if wins {
            best.insert(description, (count, first_index, category));
        }
    }

    let mut rules: Vec<CategoryRule> = best
        .into_iter()
        .map(|(description, (count, _, category))| CategoryRule {
            description,
            category,
            count,
        })
        .collect();
    rules.sort_by(|a, b| a.description.cmp(&b.description));
    rules
}

/// Left-join the rule table onto a ledger.
///
/// Every record is preserved; a record without a matching rule keeps
/// `category: None`, which is an expected state, not a failure.
pub fn enrich(ledger: &[TransactionRecord], rules: &[CategoryRule]) -> Vec<EnrichedRecord> {
    let by_description: HashMap<&str, &str> = rules
        .iter()
        .map(|r| (r.description.as_str(), r.category.as_str()))
        .collect();

    ledger
        .iter()
        .map(|record| {
            let category = by_description
                .get(record.description.as_str())
                .map(|c| (*c).to_string());
            EnrichedRecord::new(record, category)
        })
        .collect()
}
