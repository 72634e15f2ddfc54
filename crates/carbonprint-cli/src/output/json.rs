use carbonprint_core::error::CarbonError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), CarbonError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
