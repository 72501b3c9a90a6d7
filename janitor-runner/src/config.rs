//! Janitor configuration
//!
//! Region and endpoint settings for the registry client, read from the
//! process environment.

const DEFAULT_REGION: &str = "us-east-1";

/// Janitor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// AWS region hosting the registry
    pub region: String,

    /// Custom registry API endpoint (e.g., "http://localhost:4566")
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Creates a new configuration for the given region
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - REGION_NAME (optional, default: us-east-1)
    /// - AWS_ENDPOINT (optional, custom API endpoint)
    ///
    /// Variables set to an empty string count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            region: read("REGION_NAME").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: read("AWS_ENDPOINT"),
        }
    }

    /// Overrides the registry API endpoint
    #[allow(dead_code)]
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.region.is_empty() {
            anyhow::bail!("region cannot be empty");
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
                anyhow::bail!("endpoint_url must start with http:// or https://");
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}
