//! Reverse-geocoding response types and their mapping onto the form.
//!
//! The response shape follows Nominatim's `format=json&addressdetails=1`
//! output. Every field is optional; unknown keys are ignored.

use serde::Deserialize;

use crate::form::{FormField, FormState};

/// Shown instead of an address when the geocoder has no display name.
pub const NO_ADDRESS_FOUND: &str = "No address found";

/// Top-level reverse-geocode response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
}

impl GeocodeResult {
    /// Human-readable address, or [`NO_ADDRESS_FOUND`] when absent or empty.
    #[must_use]
    pub fn display_address(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_ADDRESS_FOUND)
    }
}

/// Structured `address` object of a reverse-geocode response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodeAddress {
    /// City, falling back to town and then village.
    #[must_use]
    pub fn locality(&self) -> &str {
        first_present(&[&self.city, &self.town, &self.village])
    }
}

/// Overwrites the address fields of `form` from a geocode response.
///
/// Each field becomes empty when the response lacks it, so a previous value
/// never survives a new lookup. The street in particular is cleared whenever
/// `road` is missing.
pub fn fill_address_fields(form: &mut FormState, result: &GeocodeResult) {
    let empty = GeocodeAddress::default();
    let address = result.address.as_ref().unwrap_or(&empty);

    form.set(FormField::Street, first_present(&[&address.road]));
    form.set(FormField::Neighborhood, first_present(&[&address.neighborhood]));
    form.set(FormField::City, address.locality());
    form.set(FormField::State, first_present(&[&address.state]));
    form.set(FormField::Country, first_present(&[&address.country]));

    if address.road.as_deref().is_none_or(str::is_empty) {
        form.set(FormField::Street, "");
    }
}

/// First non-empty value among `candidates`, or `""`.
fn first_present<'a>(candidates: &[&'a Option<String>]) -> &'a str {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
        .unwrap_or("")
}
