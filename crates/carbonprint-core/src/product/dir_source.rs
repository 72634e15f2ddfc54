use crate::error::CarbonError;
use crate::parsing::validate_barcode;
use crate::product::schema::OffResponse;
use crate::product::ProductSource;
use std::path::PathBuf;

/// Product lookups served from saved Open Food Facts responses.
///
/// Expects one `<barcode>.json` file per product, as returned by
/// `https://world.openfoodfacts.org/api/v0/product/<barcode>.json`.
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonDirSource { dir: dir.into() }
    }

    fn path_for(&self, barcode: &str) -> PathBuf {
        self.dir.join(format!("{barcode}.json"))
    }
}

impl ProductSource for JsonDirSource {
    fn lookup(&self, barcode: &str) -> Result<OffResponse, CarbonError> {
        let barcode = validate_barcode(barcode)?;
        let path = self.path_for(barcode);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CarbonError::ProductNotFound {
                    barcode: barcode.to_string(),
                }
            } else {
                CarbonError::ProductLookup(format!("failed to read {}: {}", path.display(), e))
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CarbonError::ProductLookup(format!("invalid response in {}: {}", path.display(), e))
        })
    }

    fn backend_name(&self) -> &str {
        "json-dir"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("3017620422003.json"),
            r#"{ "status": 1, "product": { "product_name": "Nutella" } }"#,
        )
        .unwrap();

        let source = JsonDirSource::new(dir.path());
        let resp = source.lookup("3017620422003").unwrap();
        assert_eq!(resp.status, 1);
        assert_eq!(
            resp.product.unwrap().product_name.as_deref(),
            Some("Nutella")
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());
        let err = source.lookup("111").unwrap_err();
        assert!(matches!(err, CarbonError::ProductNotFound { .. }));
    }

    #[test]
    fn test_path_like_barcode_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());
        assert!(matches!(
            source.lookup("../secrets"),
            Err(CarbonError::InvalidScan(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_lookup_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("222.json"), "not json").unwrap();
        let source = JsonDirSource::new(dir.path());
        let err = source.lookup("222").unwrap_err();
        assert!(matches!(err, CarbonError::ProductLookup(_)));
    }
}
