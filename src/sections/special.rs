//! Special section - scores the number of special characters.

use super::Points;

/// Scores the special-character count.
///
/// One special character earns 10 points, more than one earns 25.
pub fn special_points(specials: usize) -> Points {
    match specials {
        0 => 0,
        1 => 10,
        _ => 25,
    }
}
