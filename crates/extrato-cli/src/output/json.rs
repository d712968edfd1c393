use extrato_core::error::ExtratoError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), ExtratoError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
