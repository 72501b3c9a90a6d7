//! Remove untagged images command

use async_trait::async_trait;
use janitor_client::RegistryClient;
use janitor_core::domain::image::ImageFilter;
use tracing::{debug, info, warn};

use super::{Command, CommandError, StageOutput};

/// Deletes every untagged image of the repositories listed by the previous stage
///
/// Terminal stage: returns no output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveAllUntaggedImages;

impl RemoveAllUntaggedImages {
    /// Lists the untagged images of one repository and deletes them
    ///
    /// Returns the number of images the registry reports as deleted.
    async fn remove_untagged_images(
        &self,
        client: &dyn RegistryClient,
        repository_name: &str,
    ) -> Result<usize, CommandError> {
        let untagged = client
            .list_images(repository_name, ImageFilter::untagged())
            .await?;

        if untagged.image_ids.is_empty() {
            debug!("No untagged images in {}", repository_name);
            return Ok(0);
        }

        info!(
            "Deleting {} untagged image(s) from {}",
            untagged.image_ids.len(),
            repository_name
        );

        let deleted = client
            .batch_delete_image(repository_name, untagged.image_ids)
            .await?;

        for failure in &deleted.failures {
            warn!(
                "Could not delete {} from {}: {} ({})",
                failure
                    .image_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown image".to_string()),
                repository_name,
                failure.failure_reason.as_deref().unwrap_or("no reason given"),
                failure.failure_code.as_deref().unwrap_or("unknown code")
            );
        }

        Ok(deleted.image_ids.len())
    }
}

#[async_trait]
impl Command for RemoveAllUntaggedImages {
    fn name(&self) -> &'static str {
        "RemoveAllUntaggedImages"
    }

    async fn execute(
        &self,
        client: &dyn RegistryClient,
        input: Option<StageOutput>,
    ) -> Result<Option<StageOutput>, CommandError> {
        let repositories = match input {
            Some(StageOutput::Repositories(repositories)) => repositories,
            Some(other) => {
                return Err(CommandError::invalid_input(format!(
                    "expected describe repositories response, got {}",
                    other.kind()
                )));
            }
            None => {
                return Err(CommandError::invalid_input(
                    "must provide describe repositories response",
                ));
            }
        };

        // Every name is checked before the first deletion
        let repository_names = repositories
            .repositories
            .iter()
            .map(|repository| {
                repository
                    .repository_name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        CommandError::invalid_input(format!(
                            "repository without a name: {:?}",
                            repository.repository_arn
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut removed = 0;
        for repository_name in &repository_names {
            removed += self.remove_untagged_images(client, repository_name).await?;
        }

        info!(
            "Removed {} untagged image(s) across {} repositories",
            removed,
            repository_names.len()
        );

        Ok(None)
    }
}
