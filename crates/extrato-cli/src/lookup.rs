use extrato_core::error::ExtratoError;
use extrato_core::model::LookupRow;
use std::path::Path;

/// Read (description,category,count) rows from a CSV lookup export.
///
/// Expects a header row naming `description`, `category` and `count`.
pub fn load_lookup(path: &Path) -> Result<Vec<LookupRow>, ExtratoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ExtratoError::LookupLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: LookupRow = result.map_err(|e| ExtratoError::LookupLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let file = write_csv("description,category,count\nLOJA TESTE,Alimentacao,5\nFARMACIA,Saude,2\n");
        let rows = load_lookup(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "LOJA TESTE");
        assert_eq!(rows[0].category, "Alimentacao");
        assert_eq!(rows[0].count, 5);
    }

    #[test]
    fn test_bad_count_rejected() {
        let file = write_csv("description,category,count\nLOJA,Lazer,muitos\n");
        let err = load_lookup(file.path()).unwrap_err();
        assert!(matches!(err, ExtratoError::LookupLoad { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_lookup(Path::new("/nonexistent/lookup.csv")).unwrap_err();
        assert!(matches!(err, ExtratoError::LookupLoad { .. }));
    }
}
