use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while turning raw form input into typed values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The geolocation text did not yield two finite coordinates.
    #[error("malformed coordinate input \"{input}\": expected \"lat, long\"")]
    MalformedCoordinateInput { input: String },

    /// A numeric form field could not be parsed as a decimal number.
    #[error("invalid number for {field}: \"{value}\"")]
    InvalidNumber { field: String, value: String },

    #[error("failed to read form snapshot {path}: {source}")]
    FormSnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form snapshot: {0}")]
    FormSnapshotParse(#[from] serde_yaml::Error),
}
