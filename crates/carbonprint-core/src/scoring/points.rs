use crate::config::StatsConfig;
use crate::model::{Rating, ScanRecord};
use crate::scoring::outcome::UserStats;
use rust_decimal::Decimal;

/// Scores up to this value earn [`POINTS_GOOD`].
pub const GOOD_SCORE_MAX: Decimal = Decimal::from_parts(25, 0, 0, false, 1);
/// Scores above [`GOOD_SCORE_MAX`] and up to this value earn [`POINTS_FAIR`].
pub const FAIR_SCORE_MAX: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

pub const POINTS_GOOD: i64 = 5;
pub const POINTS_FAIR: i64 = 1;
pub const POINTS_POOR: i64 = -3;

/// Points earned (or lost) for a single scan with this carbon score.
pub fn points_delta(score: Decimal) -> i64 {
    if score <= GOOD_SCORE_MAX {
        POINTS_GOOD
    } else if score <= FAIR_SCORE_MAX {
        POINTS_FAIR
    } else {
        POINTS_POOR
    }
}

/// Add the points for one scan to a running total.
pub fn award_points(score: Decimal, prior_points: i64) -> i64 {
    prior_points.saturating_add(points_delta(score))
}

impl UserStats {
    /// Statistics after one more scan with the given score.
    pub fn record(&self, score: Decimal, config: &StatsConfig) -> UserStats {
        let eco_choice = Rating::from_value(score) == Rating::Low;
        UserStats {
            total_scans: self.total_scans.saturating_add(1),
            eco_points: award_points(score, self.eco_points),
            total_eco_choices: self.total_eco_choices + u64::from(eco_choice),
            carbon_saved: if eco_choice {
                self.carbon_saved
                    .saturating_add(config.carbon_saved_per_eco_choice)
            } else {
                self.carbon_saved
            },
        }
    }
}

/// Fold a scan history into user statistics, oldest scan first.
///
/// Records may be passed in any order; they are applied by ascending
/// timestamp, ties keeping their given order.
pub fn summarize(history: &[ScanRecord], config: &StatsConfig) -> UserStats {
    let mut ordered: Vec<&ScanRecord> = history.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    ordered
        .into_iter()
        .fold(UserStats::default(), |stats, r| stats.record(r.carbon_score, config))
}
