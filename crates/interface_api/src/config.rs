//! API configuration

use serde::Deserialize;

/// Base path of the customer resource unless configured otherwise
pub const DEFAULT_CUSTOMERS_ENDPOINT: &str = "/api/v1/customers";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Base path of the customer resource
    pub customers_endpoint: String,
    /// Store the demo customers at startup when the store is empty
    pub seed_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            customers_endpoint: DEFAULT_CUSTOMERS_ENDPOINT.to_string(),
            seed_demo_data: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Customer base path with a leading and without a trailing `/`
    ///
    /// The root path normalizes to `""`.
    pub fn customers_path(&self) -> String {
        let trimmed = self.customers_endpoint.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
