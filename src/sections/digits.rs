//! Digit section - scores the number of decimal digits.

use super::Points;

/// Scores the digit count.
///
/// One digit earns 10 points, three or more earn 20. Exactly two digits
/// earn nothing: the table skips that count. Known quirk, kept for
/// compatibility with existing scores.
pub fn digit_points(digits: usize) -> Points {
    match digits {
        1 => 10,
        n if n >= 3 => 20,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_points_none() {
        assert_eq!(digit_points(0), 0);
    }

    #[test]
    fn test_digit_points_single() {
        assert_eq!(digit_points(1), 10);
    }

    #[test]
    fn test_digit_points_two_earn_nothing() {
        assert_eq!(digit_points(2), 0);
    }

    #[test]
    fn test_digit_points_three_or_more() {
        assert_eq!(digit_points(3), 20);
        assert_eq!(digit_points(9), 20);
    }
}
