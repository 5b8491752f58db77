//! Length section - scores the password length tier.

use super::Points;

/// Scores the length tier.
///
/// Tiers are mutually exclusive: fewer than 5 characters earn 5 points,
/// 5 to 7 earn 10, 8 or more earn 25.
pub fn length_points(len: usize) -> Points {
    if len < 5 {
        5
    } else if len < 8 {
        10
    } else {
        25
    }
}
