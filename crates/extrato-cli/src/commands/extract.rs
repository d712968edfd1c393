use crate::commands;
use crate::output;
use extrato_core::error::ExtratoError;
use std::path::PathBuf;

pub fn run(
    files: Vec<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
) -> Result<(), ExtratoError> {
    let texts = commands::load_documents(&files, cache_dir)?;
    let outcome = extrato_core::extract_ledger(&texts);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&outcome)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} transaction(s), written to {}",
                outcome.records.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&outcome)?,
            _ => output::table::print_ledger(&outcome.records),
        },
    }

    output::table::print_diagnostics(&outcome.diagnostics);
    Ok(())
}
