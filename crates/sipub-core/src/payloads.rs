//! Create-request bodies for the three persisted resources.
//!
//! Payloads are built fresh from a form snapshot for every submission and
//! serialize with the PascalCase keys the resource API expects. The
//! `IsActive`/`IsDeleted` flags are fixed at construction: only active,
//! non-deleted resources are ever created.

use serde::Serialize;

use crate::coordinates::CoordinatePair;
use crate::form::{FormField, FormState};
use crate::CoreError;

/// One of the independently persisted resources, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Customer,
    Address,
    Product,
}

impl Resource {
    /// Fixed submission order.
    pub const ORDER: [Resource; 3] = [Resource::Customer, Resource::Address, Resource::Product];

    /// Path segment of the resource's create endpoint.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Resource::Customer => "u",
            Resource::Address => "addresses",
            Resource::Product => "products",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Customer => write!(f, "customer"),
            Resource::Address => write!(f, "address"),
            Resource::Product => write!(f, "product"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerPayload {
    is_active: bool,
    is_deleted: bool,
    pub email: String,
    pub cpf: String,
    pub name: String,
}

impl CustomerPayload {
    #[must_use]
    pub fn new(email: impl Into<String>, cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_active: true,
            is_deleted: false,
            email: email.into(),
            cpf: cpf.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self::new(&form.email, &form.cpf, &form.name)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Required fields the API will reject when empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        empty_fields(&[
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Cpf, &self.cpf),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressPayload {
    is_active: bool,
    is_deleted: bool,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AddressPayload {
    /// Builds the address from the form's text fields and an already parsed
    /// location.
    #[must_use]
    pub fn from_form(form: &FormState, location: CoordinatePair) -> Self {
        Self {
            is_active: true,
            is_deleted: false,
            street: form.street.clone(),
            number: form.number.clone(),
            neighborhood: form.neighborhood.clone(),
            complement: form.complement.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            country: form.country.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    #[must_use]
    pub fn location(&self) -> CoordinatePair {
        CoordinatePair::new(self.latitude, self.longitude)
    }

    /// Required fields the API will reject when empty. Complement is optional.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        empty_fields(&[
            (FormField::Street, &self.street),
            (FormField::Number, &self.number),
            (FormField::Neighborhood, &self.neighborhood),
            (FormField::City, &self.city),
            (FormField::State, &self.state),
            (FormField::Country, &self.country),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductPayload {
    is_active: bool,
    is_deleted: bool,
    pub weight_grams: f64,
    pub price: f64,
    pub name: String,
}

impl ProductPayload {
    #[must_use]
    pub fn new(weight_grams: f64, price: f64, name: impl Into<String>) -> Self {
        Self {
            is_active: true,
            is_deleted: false,
            weight_grams,
            price,
            name: name.into(),
        }
    }

    /// Builds the product from the form, parsing weight and price.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNumber`] if weight or price is neither empty
    /// nor a finite decimal.
    pub fn from_form(form: &FormState) -> Result<Self, CoreError> {
        let weight_grams = parse_form_number(FormField::Weight, &form.weight)?;
        let price = parse_form_number(FormField::Price, &form.price)?;
        Ok(Self::new(weight_grams, price, &form.product_name))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        empty_fields(&[(FormField::ProductName, &self.name)])
    }
}

/// Parses a numeric form field. Blank input counts as zero, as an empty
/// number input does in the browser.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumber`] for non-numeric or non-finite text.
pub fn parse_form_number(field: FormField, raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoreError::InvalidNumber {
            field: field.element_id().to_string(),
            value: raw.to_string(),
        })
}

fn empty_fields(fields: &[(FormField, &String)]) -> Vec<FormField> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect()
}
