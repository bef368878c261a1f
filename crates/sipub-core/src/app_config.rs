#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the intake client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the resource API; resource paths are appended to it.
    pub api_base_url: String,
    /// Full URL of the reverse-geocode endpoint.
    pub geocode_base_url: String,
    pub request_timeout_secs: u64,
    /// Sent on every request. Nominatim's usage policy requires an
    /// identifying agent.
    pub user_agent: String,
}
