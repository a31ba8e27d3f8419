//! Luhn checksum
//!
//! The check used for credit card numbers and other identifiers. Characters
//! other than ASCII digits are ignored but still count towards positions,
//! so `"4111 1111 1111 1111"` and `"4111111111111111"` weigh digits differently.
//!
//! Reference: <https://en.wikipedia.org/wiki/Luhn_algorithm>

/// Whether `number` passes the Luhn check
///
/// # Examples
///
/// ```
/// use algorithms::luhn::validate;
///
/// assert!(validate("79927398713"));
/// assert!(!validate("79927398710"));
/// ```
pub fn validate(number: &str) -> bool {
    luhn_sum(number) % 10 == 0
}

/// Recover the single digit written as `x` in `number`
///
/// Returns `None` when `number` has no `x`.
///
/// # Examples
///
/// ```
/// use algorithms::luhn::find_missing_digit;
///
/// assert_eq!(find_missing_digit("7992739871x"), Some(3));
/// assert_eq!(find_missing_digit("79927398713"), None);
/// ```
pub fn find_missing_digit(number: &str) -> Option<u8> {
    let x_index = number.rfind('x')?;
    let position_from_right = number.len() - 1 - x_index;
    let check_digit = (luhn_sum(&number.replace('x', "0")) * 9 % 10) as u8;

    if position_from_right % 2 == 0 {
        return Some(check_digit);
    }

    // Doubled position: the digit d contributes 2d (or 2d - 9), so undo that
    let halved = check_digit / 2;
    if validate(&number.replace('x', &halved.to_string())) {
        Some(halved)
    } else {
        Some((check_digit + 9) / 2)
    }
}

fn luhn_sum(number: &str) -> u32 {
    let len = number.len();

    number
        .bytes()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_digit())
        .map(|(i, c)| {
            let digit = u32::from(c - b'0');
            let digit = if (i + len) % 2 == 0 { digit * 2 } else { digit };
            if digit > 9 {
                digit - 9
            } else {
                digit
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(validate("79927398713"));
        assert!(validate("4111111111111111"));
        assert!(validate("5555555555554444"));
        assert!(validate("0"));
        assert!(validate(""));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!validate("79927398710"));
        assert!(!validate("4111111111111112"));
        assert!(!validate("1"));
    }

    #[test]
    fn test_non_digits_are_skipped() {
        // A leading non-digit shifts index and length together
        assert!(validate("a79927398713"));
        // Separators inside the number move later digits onto other weights
        assert!(!validate("4111 1111 1111 1111"));
        assert!(!validate("7a9927398713"));
    }

    #[test]
    fn test_find_missing_digit() {
        assert_eq!(find_missing_digit("7992739871x"), Some(3));
        assert_eq!(find_missing_digit("x9927398713"), Some(7));
        assert_eq!(find_missing_digit("79927x98713"), Some(3));
        assert_eq!(find_missing_digit("411111111111111x"), Some(1));
    }

    #[test]
    fn test_find_missing_digit_every_position() {
        let number = "4539578763621486";
        assert!(validate(number));

        for i in 0..number.len() {
            let mut masked = number.to_string();
            masked.replace_range(i..=i, "x");
            let expected = number.as_bytes()[i] - b'0';
            assert_eq!(find_missing_digit(&masked), Some(expected), "masked: {masked}");
        }
    }

    #[test]
    fn test_no_placeholder() {
        assert_eq!(find_missing_digit("12345"), None);
        assert_eq!(find_missing_digit(""), None);
    }
}
