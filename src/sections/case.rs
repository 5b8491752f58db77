//! Case section - scores the mix of uppercase and lowercase letters.

use super::Points;
use crate::counts::CharCounts;

/// Scores the case mix.
///
/// Lowercase-only passwords earn 10 points, mixed-case passwords 20.
/// Uppercase-only passwords earn nothing: the scoring table has no tier
/// for them. Known quirk, kept for compatibility with existing scores.
pub fn case_mix_points(counts: &CharCounts) -> Points {
    if counts.upper == 0 && counts.lower > 0 {
        10
    } else if counts.upper > 0 && counts.lower > 0 {
        20
    } else {
        0
    }
}
