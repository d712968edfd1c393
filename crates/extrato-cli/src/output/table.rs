use extrato_core::diagnostics::Diagnostic;
use extrato_core::model::{CategoryRule, EnrichedRecord, TransactionRecord};
use extrato_core::report::CategoryPeriodTotal;

pub fn print_ledger(records: &[TransactionRecord]) {
    if records.is_empty() {
        println!("No transactions recovered.");
        return;
    }

    let type_width = column_width(records.iter().map(|r| r.trx_type.len()), "type".len());
    let desc_width = column_width(records.iter().map(|r| r.description.len()), "description".len());

    println!(
        "{:<6} {:<type_width$} {:<desc_width$} {:>12}",
        "month", "type", "description", "amount"
    );
    for r in records {
        println!(
            "{:<6} {:<type_width$} {:<desc_width$} {:>12}",
            r.period,
            r.trx_type,
            r.description,
            r.amount.to_string()
        );
    }
}

pub fn print_enriched(records: &[EnrichedRecord]) {
    if records.is_empty() {
        println!("No transactions recovered.");
        return;
    }

    let type_width = column_width(records.iter().map(|r| r.trx_type.len()), "type".len());
    let desc_width = column_width(records.iter().map(|r| r.description.len()), "description".len());

    println!(
        "{:<6} {:<type_width$} {:<desc_width$} {:>12}  {}",
        "month", "type", "description", "amount", "category"
    );
    for r in records {
        println!(
            "{:<6} {:<type_width$} {:<desc_width$} {:>12}  {}",
            r.period,
            r.trx_type,
            r.description,
            r.amount.to_string(),
            r.category.as_deref().unwrap_or("-")
        );
    }
}

pub fn print_summary(rows: &[CategoryPeriodTotal]) {
    if rows.is_empty() {
        return;
    }

    println!("\nTotals by month and category:");
    let cat_width = column_width(
        rows.iter()
            .map(|r| r.category.as_deref().unwrap_or("(uncategorized)").len()),
        8,
    );
    for row in rows {
        println!(
            "  {:>2}  {:<cat_width$} {:>12}  ({} trx)",
            row.period,
            row.category.as_deref().unwrap_or("(uncategorized)"),
            row.total.to_string(),
            row.count
        );
    }
}

pub fn print_rules(rules: &[CategoryRule]) {
    if rules.is_empty() {
        println!("No rules derived from lookup.");
        return;
    }

    let desc_width = column_width(rules.iter().map(|r| r.description.len()), "description".len());
    println!("{:<desc_width$} {:<16} {:>7}", "description", "category", "count");
    for rule in rules {
        println!(
            "{:<desc_width$} {:<16} {:>7}",
            rule.description, rule.category, rule.count
        );
    }
}

/// Diagnostics go to stderr so piped table/JSON output stays clean.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!("{} problem(s) during extraction:", diagnostics.len());
    for d in diagnostics {
        eprintln!("  warning: {d}");
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, min: usize) -> usize {
    lengths.max().unwrap_or(min).max(min)
}
