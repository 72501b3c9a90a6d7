//! Describe registry command

use async_trait::async_trait;
use janitor_client::RegistryClient;
use tracing::debug;

use super::{Command, CommandError, StageOutput};

/// Fetches the descriptor of the account's registry
///
/// Ignores its input; the descriptor is returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeRegistry;

#[async_trait]
impl Command for DescribeRegistry {
    fn name(&self) -> &'static str {
        "DescribeRegistry"
    }

    async fn execute(
        &self,
        client: &dyn RegistryClient,
        _input: Option<StageOutput>,
    ) -> Result<Option<StageOutput>, CommandError> {
        let registry = client.describe_registry().await?;
        debug!("Registry id: {:?}", registry.registry_id);

        Ok(Some(StageOutput::Registry(registry)))
    }
}
