pub mod app_config;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod form;
pub mod geocode;
pub mod payloads;
pub mod status;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinates::{parse_coordinates, parse_location, CoordinatePair};
pub use error::{ConfigError, CoreError};
pub use form::{FormField, FormState};
pub use geocode::{fill_address_fields, GeocodeAddress, GeocodeResult, NO_ADDRESS_FOUND};
pub use payloads::{AddressPayload, CustomerPayload, ProductPayload, Resource};
pub use status::{Notification, NotificationKind, StatusBanner};
