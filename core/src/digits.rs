/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapses `n` to a single digit by repeated digit-summing.
///
/// Any positive input ends in 1..=9; zero stays zero.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Decimal digits of `text` in order, skipping anything that is not an ASCII digit.
pub fn digits_of(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Joins digits as `1+5+0+8` for calculation traces.
pub fn join_digits(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_examples() {
        assert_eq!(reduce_to_single_digit(0), 0);
        assert_eq!(reduce_to_single_digit(7), 7);
        assert_eq!(reduce_to_single_digit(33), 6);
        assert_eq!(reduce_to_single_digit(45), 9);
        assert_eq!(reduce_to_single_digit(99), 9);
        assert_eq!(reduce_to_single_digit(2031), 6);
    }

    #[test]
    fn test_reduce_matches_mod_nine() {
        for n in 1..20_000u32 {
            let r = reduce_to_single_digit(n);
            assert!((1..=9).contains(&r), "n={} gave {}", n, r);
            let expected = if n % 9 == 0 { 9 } else { n % 9 };
            assert_eq!(r, expected, "n={}", n);
        }
    }

    #[test]
    fn test_reduce_handles_large_values() {
        // 4+2+9+4+9+6+7+2+9+5 = 57 -> 12 -> 3
        assert_eq!(reduce_to_single_digit(u32::MAX), 3);
    }

    #[test]
    fn test_digits_of_skips_separators() {
        assert_eq!(digits_of("15-08-1990"), vec![1, 5, 0, 8, 1, 9, 9, 0]);
        assert_eq!(digits_of("+91 98"), vec![9, 1, 9, 8]);
        assert!(digits_of("abc").is_empty());
    }

    #[test]
    fn test_join_digits() {
        assert_eq!(join_digits(&[1, 5]), "1+5");
        assert_eq!(join_digits(&[]), "");
    }
}
