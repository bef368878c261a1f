//! The intake session: one logical actor owning the form, the status banner,
//! the enrichment state, and the submission pipeline.
//!
//! Every operation takes `&mut self`, so the map click, the push-to-form
//! action, and the submission never observe each other half-way. Errors are
//! turned into banner messages here and also returned to the caller.

use sipub_core::{AppConfig, FormState, StatusBanner};

use crate::api::ResourceApiClient;
use crate::enricher::GeocodeEnricher;
use crate::error::{ClientError, EnrichError, SubmissionError};
use crate::geocoder::ReverseGeocoder;
use crate::pipeline::{SubmissionPipeline, SubmissionReport};

pub const PUSHED_MESSAGE: &str = "Form populated with map data!";
pub const NO_LOCATION_MESSAGE: &str = "Please click on the map to select a location first.";

pub struct IntakeSession {
    form: FormState,
    banner: StatusBanner,
    enricher: GeocodeEnricher,
    pipeline: SubmissionPipeline,
}

impl IntakeSession {
    #[must_use]
    pub fn new(enricher: GeocodeEnricher, pipeline: SubmissionPipeline) -> Self {
        Self {
            form: FormState::default(),
            banner: StatusBanner::new(),
            enricher,
            pipeline,
        }
    }

    /// Builds both HTTP clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if either client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let geocoder = ReverseGeocoder::new(
            &config.geocode_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let api = ResourceApiClient::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(
            GeocodeEnricher::new(geocoder),
            SubmissionPipeline::new(api),
        ))
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    #[must_use]
    pub fn banner(&self) -> &StatusBanner {
        &self.banner
    }

    #[must_use]
    pub fn enricher(&self) -> &GeocodeEnricher {
        &self.enricher
    }

    /// Map click at `(lat, lng)`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::GeocodeService`] after posting it to the banner.
    pub async fn click_map(&mut self, lat: f64, lng: f64) -> Result<(), EnrichError> {
        let result = self.enricher.on_map_click(lat, lng, &mut self.form).await;
        if let Err(err) = &result {
            self.banner.error(format!("Erro: {err}"));
        }
        result
    }

    /// Copies the selected location into the form.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::NoLocationSelected`] after posting it to the
    /// banner.
    pub fn push_to_form(&mut self) -> Result<(), EnrichError> {
        match self.enricher.confirm_selection(&mut self.form) {
            Ok(()) => {
                self.banner.success(PUSHED_MESSAGE);
                Ok(())
            }
            Err(err) => {
                self.banner.error(NO_LOCATION_MESSAGE);
                Err(err)
            }
        }
    }

    /// Submits the form as three create-requests.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] after posting it to the banner when the
    /// form fails validation.
    pub async fn submit(&mut self) -> Result<SubmissionReport, SubmissionError> {
        let result = self.pipeline.submit(&mut self.form, &mut self.banner).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "submission rejected before sending");
            self.banner.error(format!("Erro: {err}"));
        }
        result
    }
}
