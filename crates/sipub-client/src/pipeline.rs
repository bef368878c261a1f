//! Sequential three-resource submission.
//!
//! A submission snapshots the form, validates it, builds the customer,
//! address, and product payloads, and sends one create-request per resource
//! in that order. A failed request is reported and the next resource is still
//! attempted; there is no rollback of resources already created.

use serde::Serialize;
use sipub_core::{
    parse_location, AddressPayload, CustomerPayload, FormField, FormState, ProductPayload,
    Resource, StatusBanner,
};

use crate::api::{CreatedResource, ResourceApiClient};
use crate::error::{ClientError, SubmissionError, SubmissionFailed};

pub const SUCCESS_MESSAGE: &str = "Dados enviados com sucesso!";

/// Outcome of one resource's create-request.
pub type ResourceOutcome = Result<CreatedResource, SubmissionFailed>;

/// The three independent outcomes of a submission, in request order.
#[derive(Debug)]
pub struct SubmissionReport {
    pub customer: ResourceOutcome,
    pub address: ResourceOutcome,
    pub product: ResourceOutcome,
}

impl SubmissionReport {
    /// Outcomes paired with their resource, in request order.
    #[must_use]
    pub fn outcomes(&self) -> [(Resource, &ResourceOutcome); 3] {
        [
            (Resource::Customer, &self.customer),
            (Resource::Address, &self.address),
            (Resource::Product, &self.product),
        ]
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes().iter().all(|(_, o)| o.is_ok())
    }

    #[must_use]
    pub fn failures(&self) -> Vec<&SubmissionFailed> {
        self.outcomes()
            .into_iter()
            .filter_map(|(_, o)| o.as_ref().err())
            .collect()
    }
}

/// Typed payloads built from one form snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayloads {
    pub customer: CustomerPayload,
    pub address: AddressPayload,
    pub product: ProductPayload,
}

impl SubmissionPayloads {
    /// Validates `form` and builds all three payloads.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Invalid`] when the geolocation is not a
    /// finite `"lat, long"` pair or weight/price is not numeric.
    pub fn from_form(form: &FormState) -> Result<Self, SubmissionError> {
        let location = parse_location(&form.geolocation)?;
        Ok(Self {
            customer: CustomerPayload::from_form(form),
            address: AddressPayload::from_form(form, location),
            product: ProductPayload::from_form(form)?,
        })
    }
}

pub struct SubmissionPipeline {
    api: ResourceApiClient,
}

impl SubmissionPipeline {
    #[must_use]
    pub fn new(api: ResourceApiClient) -> Self {
        Self { api }
    }

    /// Submits the three resources built from `form`.
    ///
    /// Each success posts a success notification and clears `form`; each
    /// failure posts an error notification. The banner therefore shows the
    /// product's outcome once all three requests complete, while the returned
    /// report keeps every outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] if validation fails. Nothing is sent and
    /// the form is left unchanged in that case. Per-resource failures are
    /// reported in the [`SubmissionReport`], never as an `Err`.
    pub async fn submit(
        &self,
        form: &mut FormState,
        banner: &mut StatusBanner,
    ) -> Result<SubmissionReport, SubmissionError> {
        let payloads = SubmissionPayloads::from_form(form)?;
        warn_missing(Resource::Customer, &payloads.customer.missing_fields());
        warn_missing(Resource::Address, &payloads.address.missing_fields());
        warn_missing(Resource::Product, &payloads.product.missing_fields());

        let customer = self
            .send(Resource::Customer, &payloads.customer, form, banner)
            .await;
        let address = self
            .send(Resource::Address, &payloads.address, form, banner)
            .await;
        let product = self
            .send(Resource::Product, &payloads.product, form, banner)
            .await;

        Ok(SubmissionReport {
            customer,
            address,
            product,
        })
    }

    async fn send<T: Serialize>(
        &self,
        resource: Resource,
        payload: &T,
        form: &mut FormState,
        banner: &mut StatusBanner,
    ) -> ResourceOutcome {
        match self.api.create(resource, payload).await {
            Ok(created) => {
                tracing::info!(
                    %resource,
                    status = created.status,
                    id = created.id.as_deref().unwrap_or("-"),
                    "resource created"
                );
                banner.success(SUCCESS_MESSAGE);
                form.reset();
                Ok(created)
            }
            Err(err) => {
                let failure = SubmissionFailed {
                    resource,
                    detail: failure_detail(&err),
                };
                tracing::warn!(%resource, error = %err, "create-request failed");
                banner.error(format!("Erro: {}", failure.detail));
                Err(failure)
            }
        }
    }
}

/// Short user-facing description of a failed create-request.
fn failure_detail(err: &ClientError) -> String {
    match err {
        ClientError::UnexpectedStatus {
            status,
            body: Some(body),
            ..
        } => format!("HTTP {status}: {body}"),
        ClientError::UnexpectedStatus { status, .. } => format!("HTTP {status}"),
        other => other.to_string(),
    }
}

fn warn_missing(resource: Resource, missing: &[FormField]) {
    if !missing.is_empty() {
        let fields: Vec<&str> = missing.iter().map(|f| f.element_id()).collect();
        tracing::warn!(
            %resource,
            fields = %fields.join(", "),
            "required fields are empty; the API will likely reject this resource"
        );
    }
}
