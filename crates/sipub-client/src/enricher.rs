//! Map-click enrichment: reverse-geocode a clicked point and populate the
//! address fields of the form.
//!
//! [`GeocodeEnricher`] owns the last selected location and the single map
//! marker. Both are replaced, never merged, on every click.

use sipub_core::{fill_address_fields, FormField, FormState};

use crate::error::EnrichError;
use crate::geocoder::ReverseGeocoder;

/// The location picked by the most recent map click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Geocoder display name, empty until the lookup resolves.
    pub display_address: String,
}

impl SelectedLocation {
    /// `"lat, lng"` to five decimal places, shown while the lookup is pending.
    #[must_use]
    pub fn coordinates_label(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!("{lat:.5}, {lng:.5}")),
            _ => None,
        }
    }
}

/// The single marker placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

pub struct GeocodeEnricher {
    geocoder: ReverseGeocoder,
    selected: SelectedLocation,
    marker: Option<Marker>,
}

impl GeocodeEnricher {
    #[must_use]
    pub fn new(geocoder: ReverseGeocoder) -> Self {
        Self {
            geocoder,
            selected: SelectedLocation::default(),
            marker: None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> &SelectedLocation {
        &self.selected
    }

    #[must_use]
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Handles a click at `(lat, lng)`.
    ///
    /// The coordinates are recorded before the lookup is issued. On success
    /// the display address is stored, the address fields of `form` are
    /// overwritten, and the marker moves to the clicked point.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::GeocodeService`] if the lookup fails; the form
    /// and the marker are left as they were.
    pub async fn on_map_click(
        &mut self,
        lat: f64,
        lng: f64,
        form: &mut FormState,
    ) -> Result<(), EnrichError> {
        self.selected = SelectedLocation {
            latitude: Some(lat),
            longitude: Some(lng),
            display_address: String::new(),
        };

        let result = match self.geocoder.reverse(lat, lng).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(lat, lng, error = %err, "reverse geocoding failed");
                return Err(err.into());
            }
        };

        let address = result.display_address().to_owned();
        tracing::info!(lat, lng, %address, "location selected");

        fill_address_fields(form, &result);
        self.marker = Some(Marker {
            latitude: lat,
            longitude: lng,
            label: format!("Address: {address}"),
        });
        self.selected.display_address = address;

        Ok(())
    }

    /// Pushes the selected location into the form: the coordinates go to the
    /// geolocation field, the display address to the street field.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::NoLocationSelected`] if the map was never
    /// clicked; the form is not touched.
    pub fn confirm_selection(&self, form: &mut FormState) -> Result<(), EnrichError> {
        let (Some(lat), Some(lng)) = (self.selected.latitude, self.selected.longitude) else {
            return Err(EnrichError::NoLocationSelected);
        };

        form.set(FormField::Geolocation, format!("{lat}, {lng}"));
        form.set(FormField::Street, self.selected.display_address.clone());
        Ok(())
    }
}
