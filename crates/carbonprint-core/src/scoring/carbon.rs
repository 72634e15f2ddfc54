use crate::model::{Grade, Rating};
use crate::parsing::quantity::{normalize_quantity, DEFAULT_QUANTITY};
use crate::scoring::outcome::{CarbonBreakdown, CarbonScore};
use rust_decimal::Decimal;

/// kg CO2-eq per gram (or millilitre) before the grade multiplier.
pub const BASE_EMISSION_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 4);

/// Multiplier used when the grade is missing or unknown.
pub const DEFAULT_MULTIPLIER: Decimal = Decimal::ONE;

/// Emission multiplier for a grade.
pub fn multiplier(grade: Option<Grade>) -> Decimal {
    match grade {
        Some(Grade::A) => Decimal::from_parts(5, 0, 0, false, 1),
        Some(Grade::B) => Decimal::from_parts(75, 0, 0, false, 2),
        Some(Grade::C) => Decimal::ONE,
        Some(Grade::D) => Decimal::from_parts(11, 0, 0, false, 1),
        Some(Grade::E) => Decimal::from_parts(125, 0, 0, false, 2),
        None => DEFAULT_MULTIPLIER,
    }
}

/// Compute the carbon score of `quantity` grams (or millilitres) of a
/// product with the given grade.
///
/// A non-positive quantity is replaced by [`DEFAULT_QUANTITY`].
pub fn score(grade: Option<Grade>, quantity: Decimal) -> CarbonScore {
    let quantity = if quantity > Decimal::ZERO {
        quantity
    } else {
        tracing::warn!(%quantity, "non-positive quantity passed to score, using default");
        DEFAULT_QUANTITY
    };

    // The rate times the largest multiplier is below one, so this cannot overflow
    let value = (BASE_EMISSION_RATE * multiplier(grade) * quantity).normalize();

    CarbonScore {
        value,
        rating: Rating::from_value(value),
        details: CarbonBreakdown::split(value),
    }
}

/// Score from raw product fields: a grade tag and a quantity text.
pub fn score_text(grade_tag: Option<&str>, quantity_text: &str) -> CarbonScore {
    let grade = grade_tag.and_then(|tag| {
        let grade = Grade::from_tag(tag);
        if grade.is_none() {
            tracing::debug!(grade = tag, "unknown grade, using default multiplier");
        }
        grade
    });
    score(grade, normalize_quantity(quantity_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grade_a_one_kilo() {
        let s = score(Some(Grade::A), dec!(1000));
        assert_eq!(s.value, dec!(1.25));
        assert_eq!(s.rating, Rating::High);
        assert_eq!(s.details.production, dec!(0.75));
        assert_eq!(s.details.transportation, dec!(0.3125));
        assert_eq!(s.details.disposal, dec!(0.1875));
    }

    #[test]
    fn test_value_formula_for_every_grade() {
        let grades = [
            None,
            Some(Grade::A),
            Some(Grade::B),
            Some(Grade::C),
            Some(Grade::D),
            Some(Grade::E),
        ];
        for grade in grades {
            for q in [dec!(1), dec!(33), dec!(250.5), dec!(1500)] {
                let s = score(grade, q);
                assert_eq!(s.value, dec!(0.0025) * multiplier(grade) * q);
                assert_eq!(s.details.total(), s.value);
            }
        }
    }

    #[test]
    fn test_medium_boundary_exact() {
        let s = score(None, dec!(120));
        assert_eq!(s.value, dec!(0.3));
        assert_eq!(s.rating, Rating::Medium);
    }

    #[test]
    fn test_high_boundary_exact() {
        let s = score(None, dec!(400));
        assert_eq!(s.value, dec!(1));
        assert_eq!(s.rating, Rating::High);
    }

    #[test]
    fn test_low_rating() {
        let s = score(Some(Grade::B), dec!(100));
        assert_eq!(s.value, dec!(0.1875));
        assert_eq!(s.rating, Rating::Low);
    }

    #[test]
    fn test_non_positive_quantity_uses_default() {
        assert_eq!(score(None, dec!(0)), score(None, dec!(100)));
        assert_eq!(score(Some(Grade::E), dec!(-5)), score(Some(Grade::E), dec!(100)));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(score(Some(Grade::D), dec!(750)), score(Some(Grade::D), dec!(750)));
    }

    #[test]
    fn test_score_text() {
        let s = score_text(Some("a"), "1 kg");
        assert_eq!(s.value, dec!(1.25));

        // Tags are exact: uppercase falls back to the default multiplier.
        let upper = score_text(Some("A"), "1 kg");
        assert_eq!(upper.value, dec!(2.5));

        let unknown = score_text(Some("not-applicable"), "bogus");
        assert_eq!(unknown.value, dec!(0.25));
        assert_eq!(unknown, score_text(None, "100 g"));
    }
}
