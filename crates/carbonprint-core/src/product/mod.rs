pub mod analysis;
pub mod catalog;
pub mod dir_source;
pub mod schema;

use crate::error::CarbonError;
use schema::OffResponse;

/// A backend that answers product lookups with Open Food Facts responses.
pub trait ProductSource {
    /// Fetch the response document for a (validated) barcode.
    fn lookup(&self, barcode: &str) -> Result<OffResponse, CarbonError>;

    /// Short name of the backend, for logs and diagnostics.
    fn backend_name(&self) -> &str;
}

pub use analysis::analyze_product;
pub use catalog::builtin_catalog;
pub use dir_source::JsonDirSource;
