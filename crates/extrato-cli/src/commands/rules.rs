use crate::lookup;
use crate::output;
use extrato_core::error::ExtratoError;
use std::path::Path;

pub fn show(lookup_file: &Path, output_format: &str) -> Result<(), ExtratoError> {
    let rows = lookup::load_lookup(lookup_file)?;
    let rules = extrato_core::categorize::resolve_rules(&rows);

    match output_format {
        "json" => output::json::print(&rules)?,
        _ => output::table::print_rules(&rules),
    }

    Ok(())
}

pub fn validate(lookup_file: &Path) -> Result<(), ExtratoError> {
    let rows = lookup::load_lookup(lookup_file)?;
    let rules = extrato_core::categorize::resolve_rules(&rows);

    println!(
        "{}: {} row(s), {} distinct description(s)",
        lookup_file.display(),
        rows.len(),
        rules.len()
    );
    Ok(())
}
