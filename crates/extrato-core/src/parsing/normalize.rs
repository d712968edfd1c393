/// Normalize a free-text transaction description to its canonical join key.
///
/// Tokens of exactly four digits are embedded reference/card fragments and
/// are dropped; whitespace runs collapse to single spaces; the result is
/// trimmed. Applying the function twice is a no-op, so lookup descriptions
/// and ledger descriptions can both go through it unconditionally.
pub fn normalize_description(raw: &str) -> String {
    raw.split_whitespace()
        .filter(|token| !is_noise_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A token is noise when it is exactly four ASCII digits.
fn is_noise_token(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}
