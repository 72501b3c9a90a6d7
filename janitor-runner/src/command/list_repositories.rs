//! List repositories command

use async_trait::async_trait;
use janitor_client::RegistryClient;
use tracing::info;

use super::{Command, CommandError, StageOutput};

/// Lists the repositories of the registry described by the previous stage
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRepositories;

#[async_trait]
impl Command for ListRepositories {
    fn name(&self) -> &'static str {
        "ListRepositories"
    }

    async fn execute(
        &self,
        client: &dyn RegistryClient,
        input: Option<StageOutput>,
    ) -> Result<Option<StageOutput>, CommandError> {
        let registry = match input {
            Some(StageOutput::Registry(registry)) => registry,
            Some(other) => {
                return Err(CommandError::invalid_input(format!(
                    "expected describe registry response, got {}",
                    other.kind()
                )));
            }
            None => {
                return Err(CommandError::invalid_input(
                    "must provide describe registry response",
                ));
            }
        };

        let registry_id = registry
            .registry_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                CommandError::invalid_input("describe registry response has no registry id")
            })?;

        let repositories = client.describe_repositories(registry_id).await?;
        info!(
            "Found {} repositories in registry {}",
            repositories.len(),
            registry_id
        );

        Ok(Some(StageOutput::Repositories(repositories)))
    }
}
