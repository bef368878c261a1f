//! In-memory state of the intake form.
//!
//! The form is the shared surface between the geocode enrichment flow, which
//! writes address fields, and the submission pipeline, which reads every field
//! and resets the form after each successful create-request.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Every field the intake flow reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Cpf,
    Name,
    Geolocation,
    Street,
    Number,
    Neighborhood,
    Complement,
    City,
    State,
    Country,
    Weight,
    Price,
    ProductName,
}

impl FormField {
    pub const ALL: [FormField; 14] = [
        FormField::Email,
        FormField::Cpf,
        FormField::Name,
        FormField::Geolocation,
        FormField::Street,
        FormField::Number,
        FormField::Neighborhood,
        FormField::Complement,
        FormField::City,
        FormField::State,
        FormField::Country,
        FormField::Weight,
        FormField::Price,
        FormField::ProductName,
    ];

    /// Element id of the field in the web form this state mirrors.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Cpf => "cpf",
            FormField::Name => "nome",
            FormField::Geolocation => "geolocalizacao",
            FormField::Street => "logradouro",
            FormField::Number => "numero",
            FormField::Neighborhood => "bairro",
            FormField::Complement => "complemento",
            FormField::City => "cidade",
            FormField::State => "estado",
            FormField::Country => "pais",
            FormField::Weight => "peso",
            FormField::Price => "productPrice",
            FormField::ProductName => "productName",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Raw string values of every form field.
///
/// Deserializes from a YAML snapshot where every key is optional; absent keys
/// are empty strings, exactly as an untouched input would be. Bare YAML
/// scalars (`weight: 250`) are accepted and kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    #[serde(deserialize_with = "scalar_string")]
    pub email: String,
    #[serde(deserialize_with = "scalar_string")]
    pub cpf: String,
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    /// Free text in `"lat, long"` form.
    #[serde(deserialize_with = "scalar_string")]
    pub geolocation: String,
    #[serde(deserialize_with = "scalar_string")]
    pub street: String,
    #[serde(deserialize_with = "scalar_string")]
    pub number: String,
    #[serde(deserialize_with = "scalar_string")]
    pub neighborhood: String,
    #[serde(deserialize_with = "scalar_string")]
    pub complement: String,
    #[serde(deserialize_with = "scalar_string")]
    pub city: String,
    #[serde(deserialize_with = "scalar_string")]
    pub state: String,
    #[serde(deserialize_with = "scalar_string")]
    pub country: String,
    #[serde(deserialize_with = "scalar_string")]
    pub weight: String,
    #[serde(deserialize_with = "scalar_string")]
    pub price: String,
    #[serde(deserialize_with = "scalar_string")]
    pub product_name: String,
}

impl FormState {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Cpf => &self.cpf,
            FormField::Name => &self.name,
            FormField::Geolocation => &self.geolocation,
            FormField::Street => &self.street,
            FormField::Number => &self.number,
            FormField::Neighborhood => &self.neighborhood,
            FormField::Complement => &self.complement,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::Country => &self.country,
            FormField::Weight => &self.weight,
            FormField::Price => &self.price,
            FormField::ProductName => &self.product_name,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Email => &mut self.email,
            FormField::Cpf => &mut self.cpf,
            FormField::Name => &mut self.name,
            FormField::Geolocation => &mut self.geolocation,
            FormField::Street => &mut self.street,
            FormField::Number => &mut self.number,
            FormField::Neighborhood => &mut self.neighborhood,
            FormField::Complement => &mut self.complement,
            FormField::City => &mut self.city,
            FormField::State => &mut self.state,
            FormField::Country => &mut self.country,
            FormField::Weight => &mut self.weight,
            FormField::Price => &mut self.price,
            FormField::ProductName => &mut self.product_name,
        };
        *slot = value.into();
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Parses a YAML form snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FormSnapshotParse`] if the YAML is malformed or a
    /// value is not a scalar.
    pub fn from_yaml_str(content: &str) -> Result<Self, CoreError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Loads a YAML form snapshot from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FormSnapshotIo`] if the file cannot be read, or
    /// [`CoreError::FormSnapshotParse`] if it cannot be parsed.
    pub fn load_snapshot(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::FormSnapshotIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }
}

/// Accepts any YAML scalar (or null) and keeps its textual form.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}
