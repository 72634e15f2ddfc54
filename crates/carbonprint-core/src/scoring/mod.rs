pub mod carbon;
pub mod outcome;
pub mod points;

pub use carbon::{multiplier, score, score_text};
pub use outcome::{CarbonBreakdown, CarbonScore, UserStats};
pub use points::{award_points, points_delta, summarize};
