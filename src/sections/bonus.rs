//! Bonus section - combination bonuses over the class counts.

use super::Points;
use crate::counts::CharCounts;

/// Scores the combination bonuses.
///
/// Unlike the per-class tiers these stack: a password with digits, both
/// letter cases and a special character earns all three (2 + 3 + 5).
pub fn combination_points(counts: &CharCounts) -> Points {
    let mut points = 0;

    // letters and digits
    if counts.digits > 0 && counts.letters() > 0 {
        points += 2;
    }
    // letters, digits and specials
    if counts.digits > 0 && counts.letters() > 0 && counts.specials > 0 {
        points += 3;
    }
    // mixed-case letters, digits and specials
    if counts.digits > 0 && counts.upper > 0 && counts.lower > 0 && counts.specials > 0 {
        points += 5;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_letters_and_digits() {
        let counts = CharCounts {
            upper: 0,
            lower: 5,
            digits: 2,
            specials: 0,
        };
        assert_eq!(combination_points(&counts), 2);
    }

    #[test]
    fn test_combination_letters_digits_specials() {
        let counts = CharCounts {
            upper: 0,
            lower: 5,
            digits: 2,
            specials: 1,
        };
        assert_eq!(combination_points(&counts), 5);
    }

    #[test]
    fn test_combination_full_stack() {
        let counts = CharCounts {
            upper: 1,
            lower: 4,
            digits: 2,
            specials: 1,
        };
        assert_eq!(combination_points(&counts), 10);
    }

    #[test]
    fn test_combination_requires_digits() {
        let counts = CharCounts {
            upper: 1,
            lower: 4,
            digits: 0,
            specials: 2,
        };
        assert_eq!(combination_points(&counts), 0);
    }

    #[test]
    fn test_combination_digits_only() {
        let counts = CharCounts {
            upper: 0,
            lower: 0,
            digits: 4,
            specials: 0,
        };
        assert_eq!(combination_points(&counts), 0);
    }
}
