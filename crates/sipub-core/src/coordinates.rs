//! Parsing of the free-text geolocation field (`"lat, long"`).
//!
//! [`parse_coordinates`] never fails: malformed components come back as NaN.
//! [`parse_location`] is the validating entry point used before any network
//! call is made.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A latitude/longitude pair in decimal degrees.
///
/// Either component may be NaN when produced by [`parse_coordinates`] from
/// malformed input. A NaN component means "no location", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinatePair {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both components are finite numbers.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl std::fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Splits `text` on the first comma and parses both halves as decimals.
///
/// Surrounding whitespace is trimmed from each half. A missing second half or
/// a non-numeric half yields NaN for that component.
#[must_use]
pub fn parse_coordinates(text: &str) -> CoordinatePair {
    let (lat, long) = match text.split_once(',') {
        Some((lat, long)) => (lat, Some(long)),
        None => (text, None),
    };

    CoordinatePair {
        latitude: parse_component(lat),
        longitude: long.map_or(f64::NAN, parse_component),
    }
}

/// Parses `text` like [`parse_coordinates`] and rejects non-finite results.
///
/// # Errors
///
/// Returns [`CoreError::MalformedCoordinateInput`] when either component is
/// missing, non-numeric, or infinite.
pub fn parse_location(text: &str) -> Result<CoordinatePair, CoreError> {
    let pair = parse_coordinates(text);
    if pair.is_valid() {
        Ok(pair)
    } else {
        Err(CoreError::MalformedCoordinateInput {
            input: text.to_owned(),
        })
    }
}

fn parse_component(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
