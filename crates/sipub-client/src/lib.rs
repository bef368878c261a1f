pub mod api;
pub mod enricher;
pub mod error;
pub mod geocoder;
pub mod pipeline;
pub mod session;

pub use api::{CreatedResource, ResourceApiClient};
pub use enricher::{GeocodeEnricher, Marker, SelectedLocation};
pub use error::{ClientError, EnrichError, SubmissionError, SubmissionFailed};
pub use geocoder::ReverseGeocoder;
pub use pipeline::{ResourceOutcome, SubmissionPayloads, SubmissionPipeline, SubmissionReport};
pub use session::IntakeSession;
