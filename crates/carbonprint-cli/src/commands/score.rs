use carbonprint_core::error::CarbonError;
use carbonprint_core::model::Grade;
use carbonprint_core::normalize_quantity;
use carbonprint_core::scoring::{multiplier, points_delta, score};
use serde_json::json;

use crate::output;

pub fn run(quantity: &str, grade: Option<&str>, output_format: &str) -> Result<(), CarbonError> {
    let grade = grade.and_then(Grade::from_tag);
    let normalized = normalize_quantity(quantity);
    let result = score(grade, normalized);
    let points = points_delta(result.value);

    match output_format {
        "json" => output::json::print(&json!({
            "quantity": normalized.to_string(),
            "grade": grade.map(|g| g.to_string()),
            "multiplier": multiplier(grade).to_string(),
            "carbonScore": result,
            "ecoPoints": points,
        })),
        _ => {
            output::table::print_score(normalized, grade, &result, points);
            Ok(())
        }
    }
}
