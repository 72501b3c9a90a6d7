//! In-memory registry and log capture used by the unit tests
//!
//! The registry serves canned responses and records every call in order.

use async_trait::async_trait;
use janitor_client::{ClientError, RegistryClient, Result};
use janitor_core::domain::image::{
    DeletedImages, ImageFailure, ImageFilter, ImageId, ImageList, TagStatus,
};
use janitor_core::domain::registry::RegistryDescriptor;
use janitor_core::domain::repository::{Repository, RepositoryList};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// An image held by [`FakeRegistry`] and whether a tag points to it
pub type StoredImage = (ImageId, TagStatus);

pub fn tagged(digest: &str, tag: &str) -> StoredImage {
    (ImageId::digest(digest).with_tag(tag), TagStatus::Tagged)
}

pub fn untagged(digest: &str) -> StoredImage {
    (ImageId::digest(digest), TagStatus::Untagged)
}

/// A registry API call as observed by [`FakeRegistry`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DescribeRegistry,
    DescribeRepositories(String),
    ListImages(String, ImageFilter),
    BatchDeleteImage(String, Vec<ImageId>),
}

pub struct FakeRegistry {
    registry_id: String,
    /// Repository name and the images it holds
    repositories: Vec<(String, Vec<StoredImage>)>,
    rejected: Vec<ImageFailure>,
    failing_operation: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRegistry {
    pub fn new(registry_id: &str) -> Self {
        Self {
            registry_id: registry_id.to_string(),
            repositories: Vec::new(),
            rejected: Vec::new(),
            failing_operation: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_repository(mut self, name: &str, images: Vec<StoredImage>) -> Self {
        self.repositories.push((name.to_string(), images));
        self
    }

    /// Makes every call to `operation` fail
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing_operation = Some(operation);
        self
    }

    /// Makes the registry refuse to delete the image named in `failure`
    pub fn rejecting(mut self, failure: ImageFailure) -> Self {
        self.rejected.push(failure);
        self
    }

    pub fn repository_list(&self) -> RepositoryList {
        self.repositories
            .iter()
            .map(|(name, _)| Repository {
                registry_id: Some(self.registry_id.clone()),
                ..Repository::named(name.as_str())
            })
            .collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::ListImages(..)))
            .count()
    }

    /// Repositories that received a delete call, in call order
    pub fn deleted_from(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::BatchDeleteImage(name, _) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);

        if self.failing_operation == Some(operation) {
            return Err(ClientError::RequestFailed {
                operation,
                code: Some("ServerException".to_string()),
                message: "injected failure".to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl RegistryClient for FakeRegistry {
    async fn describe_registry(&self) -> Result<RegistryDescriptor> {
        self.record("DescribeRegistry", Call::DescribeRegistry)?;
        Ok(RegistryDescriptor::new(self.registry_id.as_str()))
    }

    async fn describe_repositories(&self, registry_id: &str) -> Result<RepositoryList> {
        self.record(
            "DescribeRepositories",
            Call::DescribeRepositories(registry_id.to_string()),
        )?;

        if registry_id != self.registry_id {
            return Err(ClientError::RequestFailed {
                operation: "DescribeRepositories",
                code: Some("RegistryNotFoundException".to_string()),
                message: format!("no registry {registry_id}"),
            });
        }

        Ok(self.repository_list())
    }

    async fn list_images(&self, repository_name: &str, filter: ImageFilter) -> Result<ImageList> {
        self.record(
            "ListImages",
            Call::ListImages(repository_name.to_string(), filter),
        )?;

        self.repositories
            .iter()
            .find(|(name, _)| name == repository_name)
            .map(|(_, images)| {
                images
                    .iter()
                    .filter(|(_, status)| matches_filter(filter, *status))
                    .map(|(image, _)| image.clone())
                    .collect()
            })
            .ok_or_else(|| ClientError::RequestFailed {
                operation: "ListImages",
                code: Some("RepositoryNotFoundException".to_string()),
                message: format!("no repository {repository_name}"),
            })
    }

    async fn batch_delete_image(
        &self,
        repository_name: &str,
        image_ids: Vec<ImageId>,
    ) -> Result<DeletedImages> {
        self.record(
            "BatchDeleteImage",
            Call::BatchDeleteImage(repository_name.to_string(), image_ids.clone()),
        )?;

        let (failures, image_ids): (Vec<_>, Vec<_>) = image_ids.into_iter().partition(|image| {
            self.rejected
                .iter()
                .any(|failure| failure.image_id.as_ref() == Some(image))
        });

        Ok(DeletedImages {
            image_ids,
            failures: failures
                .into_iter()
                .filter_map(|image| {
                    self.rejected
                        .iter()
                        .find(|failure| failure.image_id.as_ref() == Some(&image))
                        .cloned()
                })
                .collect(),
        })
    }
}

fn matches_filter(filter: ImageFilter, status: TagStatus) -> bool {
    match filter.tag_status {
        None | Some(TagStatus::Any) => true,
        Some(wanted) => wanted == status,
    }
}

/// Layer collecting the message of every event emitted while it is installed
#[derive(Clone, Default)]
pub struct EventRecorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl EventRecorder {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages.lock().unwrap().push(message);
        }
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}
