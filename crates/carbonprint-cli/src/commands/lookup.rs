use carbonprint_core::error::CarbonError;
use carbonprint_core::product::{builtin_catalog, JsonDirSource};
use std::path::PathBuf;

use crate::output;

pub fn run(barcode: &str, products_dir: PathBuf, output_format: &str) -> Result<(), CarbonError> {
    let catalog = builtin_catalog()?;
    let source = JsonDirSource::new(products_dir);
    let product = carbonprint_core::lookup_product(barcode, &source, &catalog)?;

    match output_format {
        "json" => output::json::print(&product)?,
        _ => output::table::print_product(&product),
    }

    Ok(())
}
