use crate::commands;
use crate::lookup;
use crate::output;
use extrato_core::error::ExtratoError;
use std::path::PathBuf;

pub fn run(
    files: Vec<PathBuf>,
    lookup_file: PathBuf,
    output_format: &str,
    cache_dir: Option<PathBuf>,
) -> Result<(), ExtratoError> {
    let texts = commands::load_documents(&files, cache_dir)?;
    let rows = lookup::load_lookup(&lookup_file)?;

    let outcome = extrato_core::ingest(&texts, &rows);

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => {
            output::table::print_enriched(&outcome.records);
            let summary = extrato_core::report::summarize(&outcome.records);
            output::table::print_summary(&summary);
        }
    }

    output::table::print_diagnostics(&outcome.diagnostics);
    Ok(())
}
