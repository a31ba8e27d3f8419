//! Property-based tests using proptest.

use algorithms::{geohash, luhn, ListBasedStack, SortedList};
use proptest::prelude::*;

// Append the digit that makes `body` pass the Luhn check
fn with_check_digit(body: &str) -> String {
    let masked = format!("{body}x");
    let digit = luhn::find_missing_digit(&masked).expect("masked number has a placeholder");
    format!("{body}{digit}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn sorted_list_stays_sorted(values in proptest::collection::vec(-1000i32..1000, 0..50)) {
        let mut list = SortedList::new();
        for &value in &values {
            list.add(value);
        }

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(list.as_slice(), expected.as_slice());

        for value in &values {
            prop_assert!(list.contains(value));
        }
    }

    #[test]
    fn sorted_list_remove_all(values in proptest::collection::vec(0u16..100, 0..30)) {
        let mut list = SortedList::new();
        for &value in &values {
            list.add(value);
        }
        for value in &values {
            prop_assert!(list.try_remove(value));
        }
        prop_assert!(list.is_empty());
    }

    #[test]
    fn stack_pops_in_reverse(values in proptest::collection::vec(any::<u32>(), 0..50)) {
        let mut stack: ListBasedStack<u32> = values.iter().copied().collect();
        let mut popped = Vec::with_capacity(values.len());
        while let Ok(value) = stack.pop() {
            popped.push(value);
        }

        popped.reverse();
        prop_assert_eq!(popped, values);
    }

    #[test]
    fn luhn_check_digit_validates(body in "[0-9]{1,18}") {
        let number = with_check_digit(&body);
        prop_assert!(luhn::validate(&number));
    }

    #[test]
    fn luhn_recovers_any_masked_digit(body in "[0-9]{1,18}", position in any::<prop::sample::Index>()) {
        let number = with_check_digit(&body);
        let i = position.index(number.len());

        let mut masked = number.clone();
        masked.replace_range(i..=i, "x");

        let expected = number.as_bytes()[i] - b'0';
        prop_assert_eq!(luhn::find_missing_digit(&masked), Some(expected));
    }

    #[test]
    fn geohash_precision_is_prefix(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        precision in 1usize..=12,
    ) {
        let full = geohash::encode(latitude, longitude).unwrap();
        let short = geohash::encode_with_precision(latitude, longitude, precision).unwrap();

        prop_assert_eq!(short.len(), precision);
        prop_assert!(full.starts_with(&short));
    }
}
