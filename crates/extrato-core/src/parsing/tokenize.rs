use crate::error::ExtratoError;

/// Account header anchor. Everything up to and including its LAST
/// occurrence (plus the account digit that trails it) is summary framing.
const OPEN_MARKER: &str = "CONTA SIMPLES N";

/// Closing anchor. Everything from its FIRST occurrence onward is footer.
const CLOSE_MARKER: &str = "SALDO FINAL";

/// The source layout always breaks the first transaction row across the
/// lines at these fixed indices; they are glued back together. A quirk of
/// the flattened report, not a general rule.
const SPLIT_ROW_HEAD: usize = 8;
const SPLIT_ROW_TAIL: usize = 9;

const MIN_LINES: usize = 10;

/// Cut the framing off a flattened statement and return its data lines:
/// the re-merged first row followed by every remaining line. Lines before
/// the merged row are layout boilerplate and are discarded.
pub fn tokenize(text: &str) -> Result<Vec<String>, ExtratoError> {
    let body = trim_framing(text)?;
    let lines: Vec<&str> = body.split('\n').collect();

    if lines.len() < MIN_LINES {
        return Err(ExtratoError::MalformedDocument(format!(
            "expected at least {MIN_LINES} lines after framing, found {}",
            lines.len()
        )));
    }

    let merged = format!("{} {}", lines[SPLIT_ROW_HEAD], lines[SPLIT_ROW_TAIL]);

    let mut out = Vec::with_capacity(lines.len() - SPLIT_ROW_TAIL);
    out.push(merged);
    out.extend(lines[SPLIT_ROW_TAIL + 1..].iter().map(|l| l.to_string()));
    Ok(out)
}

/// Locate both anchors and return the text between them. A missing anchor
/// means upstream text would leak into parsing, so it is rejected as a
/// malformed document instead.
fn trim_framing(text: &str) -> Result<&str, ExtratoError> {
    let open = text.rfind(OPEN_MARKER).ok_or_else(|| {
        ExtratoError::MalformedDocument(format!("missing '{OPEN_MARKER}' anchor"))
    })?;

    // Skip the account digit that trails the anchor.
    let after_marker = open + OPEN_MARKER.len();
    let start = text[after_marker..]
        .chars()
        .next()
        .map(|c| after_marker + c.len_utf8())
        .unwrap_or(text.len());

    let rest = &text[start..];
    let close = rest.find(CLOSE_MARKER).ok_or_else(|| {
        ExtratoError::MalformedDocument(format!("missing '{CLOSE_MARKER}' anchor"))
    })?;

    Ok(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(data_lines: &[&str]) -> String {
        let mut text = String::from("EXTRATO DIGITAL\nCONTA SIMPLES N1\n");
        text.push_str("AGENCIA 0001\nCLIENTE FULANO\nPERIODO 01.03 A 31.03\n");
        text.push_str("L4\nL5\nL6\nL7\n");
        for line in data_lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("SALDO FINAL 45.00\n");
        text
    }

    #[test]
    fn test_split_row_merged() {
        let lines = tokenize(&doc(&[
            "5.3 100.00 COMPRA LOJA",
            "TESTE 45.00 55.00",
            "7.3 55.00 PIX MERCADO 10.00 45.00",
        ]))
        .unwrap();
        assert_eq!(lines[0], "5.3 100.00 COMPRA LOJA TESTE 45.00 55.00");
        assert_eq!(lines[1], "7.3 55.00 PIX MERCADO 10.00 45.00");
    }

    #[test]
    fn test_boilerplate_discarded() {
        let lines = tokenize(&doc(&["a", "b", "c"])).unwrap();
        assert!(lines.iter().all(|l| !l.contains("AGENCIA")));
        assert!(lines.iter().all(|l| !l.contains("CLIENTE")));
    }

    #[test]
    fn test_last_open_marker_wins() {
        // A second account header restarts the framing; only text after
        // the last one survives.
        let text = format!("CONTA SIMPLES N9\nstale\nstale\n{}", doc(&["x", "y"]));
        let lines = tokenize(&text).unwrap();
        assert!(lines.iter().all(|l| !l.contains("stale")));
    }

    #[test]
    fn test_footer_removed() {
        let lines = tokenize(&doc(&["only", "data", "rows"])).unwrap();
        assert!(lines.iter().all(|l| !l.contains("SALDO FINAL")));
    }

    #[test]
    fn test_missing_open_marker() {
        let err = tokenize("no anchors here\nat all\n").unwrap_err();
        assert!(matches!(err, ExtratoError::MalformedDocument(_)));
        assert!(err.to_string().contains("CONTA SIMPLES N"));
    }

    #[test]
    fn test_missing_close_marker() {
        let err = tokenize("CONTA SIMPLES N1\na\nb\nc\nd\ne\nf\ng\nh\ni\n").unwrap_err();
        assert!(matches!(err, ExtratoError::MalformedDocument(_)));
        assert!(err.to_string().contains("SALDO FINAL"));
    }

    #[test]
    fn test_too_few_lines() {
        let err = tokenize("CONTA SIMPLES N1\na\nb\nSALDO FINAL").unwrap_err();
        assert!(matches!(err, ExtratoError::MalformedDocument(_)));
    }
}
