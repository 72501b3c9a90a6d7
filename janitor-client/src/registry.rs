//! Registry-related API calls

use crate::EcrClient;
use crate::error::{ClientError, Result};
use janitor_core::domain::registry::RegistryDescriptor;
use tracing::debug;

impl EcrClient {
    /// Describe the registry of the calling account
    pub(crate) async fn fetch_registry(&self) -> Result<RegistryDescriptor> {
        let output = self
            .client
            .describe_registry()
            .send()
            .await
            .map_err(|e| ClientError::request_failed("DescribeRegistry", e))?;

        debug!("Described registry {:?}", output.registry_id());

        Ok(RegistryDescriptor {
            registry_id: output.registry_id().map(str::to_string),
        })
    }
}
