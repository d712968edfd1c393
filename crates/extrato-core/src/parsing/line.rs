use crate::diagnostics::ParseFailureReason;
use crate::model::TransactionRecord;
use crate::parsing::normalize::normalize_description;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Anchored transaction shape: leading `day.month` token and running
/// balance, a non-greedy description field, then the amount and the post
/// balance. The amount is always the `\d+.\d\d` group sitting between the
/// description and the final balance token.
static LINE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\s+\d+\.\d+\s+(.*?)\s+(\d+\.\d\d)\s+\d+\.\d+$").unwrap()
});

/// Parse one data line into a transaction record.
///
/// A line that does not match the anchor shape yields
/// `DescriptionNotRecovered`; matched tokens that fail numeric parsing
/// yield the typed failure carrying the raw token. No field ever falls
/// back to zero.
pub fn parse_line(line: &str) -> Result<TransactionRecord, ParseFailureReason> {
    let caps = LINE_SHAPE
        .captures(line.trim())
        .ok_or(ParseFailureReason::DescriptionNotRecovered)?;

    let day = &caps[1];
    let month = &caps[2];

    // The day component is validated but not retained.
    day.parse::<u32>()
        .map_err(|_| ParseFailureReason::UnparsedDate(format!("{day}.{month}")))?;
    let period: u32 = month
        .parse()
        .map_err(|_| ParseFailureReason::UnparsedDate(format!("{day}.{month}")))?;
    if !(1..=12).contains(&period) {
        return Err(ParseFailureReason::PeriodOutOfRange(period));
    }

    let field = &caps[3];
    let mut words = field.split_whitespace();
    let trx_type = words
        .next()
        .ok_or(ParseFailureReason::DescriptionNotRecovered)?
        .to_string();
    let remainder = words.collect::<Vec<_>>().join(" ");
    let description = normalize_description(&remainder);

    let amount_token = &caps[4];
    let amount = Decimal::from_str(amount_token)
        .map_err(|_| ParseFailureReason::UnparsedAmount(amount_token.to_string()))?;

    Ok(TransactionRecord {
        period,
        trx_type,
        description,
        amount,
    })
}
