//! Geohash encoding
//!
//! Interleaves longitude and latitude bisection bits (longitude first) and
//! emits one base32 character per five bits.

use crate::error::{AlgorithmError, Result};

const BASE32_CHARACTERS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Default and maximum geohash length
pub const GEOHASH_LENGTH: usize = 12;

/// Encode a coordinate as a 12-character geohash
///
/// # Examples
///
/// ```
/// use algorithms::geohash::encode;
///
/// let hash = encode(57.64911, 10.40744).unwrap();
/// assert!(hash.starts_with("u4pruydqqvj"));
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<String> {
    encode_with_precision(latitude, longitude, GEOHASH_LENGTH)
}

/// Encode a coordinate as a geohash of `precision` characters (1..=12)
pub fn encode_with_precision(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AlgorithmError::InvalidCoordinate(format!(
            "latitude {latitude} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AlgorithmError::InvalidCoordinate(format!(
            "longitude {longitude} outside [-180, 180]"
        )));
    }
    if precision == 0 || precision > GEOHASH_LENGTH {
        return Err(AlgorithmError::InvalidPrecision(precision));
    }

    let mut latitude_range = [-90.0, 90.0];
    let mut longitude_range = [-180.0, 180.0];
    let mut encoding_longitude = true;
    let mut current_bit = 0;
    let mut base32_index = 0usize;
    let mut geohash = String::with_capacity(precision);

    while geohash.len() < precision {
        let (range, value) = if encoding_longitude {
            (&mut longitude_range, longitude)
        } else {
            (&mut latitude_range, latitude)
        };

        let midpoint = (range[0] + range[1]) / 2.0;
        if value > midpoint {
            base32_index |= 1 << (4 - current_bit);
            range[0] = midpoint;
        } else {
            range[1] = midpoint;
        }
        encoding_longitude = !encoding_longitude;

        if current_bit < 4 {
            current_bit += 1;
        } else {
            geohash.push(BASE32_CHARACTERS[base32_index] as char);
            current_bit = 0;
            base32_index = 0;
        }
    }

    Ok(geohash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locations() {
        assert_eq!(encode_with_precision(42.6, -5.6, 5).unwrap(), "ezs42");
        assert_eq!(encode_with_precision(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn test_default_length() {
        let hash = encode(52.5200, 13.4050).unwrap();
        assert_eq!(hash.len(), GEOHASH_LENGTH);
        assert!(hash.starts_with("u33d"));
    }

    #[test]
    fn test_origin_stays_on_lower_halves() {
        // Values equal to the midpoint fall into the lower half
        assert_eq!(encode(0.0, 0.0).unwrap(), "7zzzzzzzzzzz");
    }

    #[test]
    fn test_inclusive_boundaries() {
        assert_eq!(encode(90.0, 180.0).unwrap(), "zzzzzzzzzzzz");
        assert_eq!(encode(-90.0, -180.0).unwrap(), "000000000000");
    }

    #[test]
    fn test_shorter_hash_is_prefix() {
        let full = encode(-33.8688, 151.2093).unwrap();
        let short = encode_with_precision(-33.8688, 151.2093, 6).unwrap();
        assert!(full.starts_with(&short));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(encode(91.0, 0.0), Err(AlgorithmError::InvalidCoordinate(_))));
        assert!(matches!(encode(0.0, -180.5), Err(AlgorithmError::InvalidCoordinate(_))));
        assert!(matches!(encode(f64::NAN, 0.0), Err(AlgorithmError::InvalidCoordinate(_))));
        assert_eq!(
            encode_with_precision(0.0, 0.0, 0),
            Err(AlgorithmError::InvalidPrecision(0))
        );
        assert_eq!(
            encode_with_precision(0.0, 0.0, 13),
            Err(AlgorithmError::InvalidPrecision(13))
        );
    }
}
