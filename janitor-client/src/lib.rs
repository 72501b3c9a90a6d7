//! Janitor Registry Client
//!
//! A typed client for the container registry API (Amazon ECR).
//!
//! The runner only depends on the [`RegistryClient`] trait; [`EcrClient`] is the
//! production implementation built on the AWS SDK. The SDK owns credentials,
//! retries and throttling. This crate drains paginated listings and converts
//! SDK types into `janitor-core` domain types at the boundary.
//!
//! # Example
//!
//! ```no_run
//! use janitor_client::{EcrClient, RegistryClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EcrClient::connect("us-east-1", None).await;
//!
//!     let registry = client.describe_registry().await?;
//!     println!("Registry: {:?}", registry.registry_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod images;
mod registry;
mod repositories;

pub use error::{ClientError, Result};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecr::config::Region;
use janitor_core::domain::image::{DeletedImages, ImageFilter, ImageId, ImageList};
use janitor_core::domain::registry::RegistryDescriptor;
use janitor_core::domain::repository::RepositoryList;

/// Registry operations the janitor relies on
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Describes the registry of the calling account
    async fn describe_registry(&self) -> Result<RegistryDescriptor>;

    /// Lists every repository of the given registry
    async fn describe_repositories(&self, registry_id: &str) -> Result<RepositoryList>;

    /// Lists the images of a repository matching `filter`
    async fn list_images(&self, repository_name: &str, filter: ImageFilter) -> Result<ImageList>;

    /// Deletes the given images from a repository
    async fn batch_delete_image(
        &self,
        repository_name: &str,
        image_ids: Vec<ImageId>,
    ) -> Result<DeletedImages>;
}

/// Amazon ECR implementation of [`RegistryClient`]
#[derive(Debug, Clone)]
pub struct EcrClient {
    client: aws_sdk_ecr::Client,
}

impl EcrClient {
    /// Create a client from the shared AWS configuration
    ///
    /// Credentials come from the SDK default provider chain.
    ///
    /// # Arguments
    /// * `region` - AWS region (e.g., "us-east-1")
    /// * `endpoint_url` - Optional endpoint override (e.g., a local registry emulator)
    pub async fn connect(region: impl Into<String>, endpoint_url: Option<String>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.into()));

        if let Some(endpoint_url) = endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        Self::with_client(aws_sdk_ecr::Client::new(&sdk_config))
    }

    /// Wrap a preconfigured SDK client
    ///
    /// This allows you to configure timeouts, retry policy, credentials, etc.
    pub fn with_client(client: aws_sdk_ecr::Client) -> Self {
        Self { client }
    }

    /// Region the client sends requests to
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(AsRef::<str>::as_ref)
    }
}

#[async_trait]
impl RegistryClient for EcrClient {
    async fn describe_registry(&self) -> Result<RegistryDescriptor> {
        self.fetch_registry().await
    }

    async fn describe_repositories(&self, registry_id: &str) -> Result<RepositoryList> {
        self.fetch_repositories(registry_id).await
    }

    async fn list_images(&self, repository_name: &str, filter: ImageFilter) -> Result<ImageList> {
        self.fetch_images(repository_name, filter).await
    }

    async fn batch_delete_image(
        &self,
        repository_name: &str,
        image_ids: Vec<ImageId>,
    ) -> Result<DeletedImages> {
        self.delete_images(repository_name, image_ids).await
    }
}
