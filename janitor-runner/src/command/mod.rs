//! Cleanup commands
//!
//! A command is one stage of the cleanup chain. It receives the registry
//! client and the output of the previous stage, and returns the input of
//! the next one.
//!
//! All commands are trait-based so the chain runner can drive them
//! uniformly and tests can substitute their own.

mod describe_registry;
mod list_repositories;
mod remove_untagged;

pub use describe_registry::DescribeRegistry;
pub use list_repositories::ListRepositories;
pub use remove_untagged::RemoveAllUntaggedImages;

use async_trait::async_trait;
use janitor_client::{ClientError, RegistryClient};
use janitor_core::domain::registry::RegistryDescriptor;
use janitor_core::domain::repository::RepositoryList;
use thiserror::Error;

/// Value handed from one stage to the next
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutput {
    /// Output of [`DescribeRegistry`]
    Registry(RegistryDescriptor),
    /// Output of [`ListRepositories`]
    Repositories(RepositoryList),
}

impl StageOutput {
    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Registry(_) => "describe registry response",
            Self::Repositories(_) => "describe repositories response",
        }
    }
}

/// Errors raised while executing a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The previous stage did not provide what this command needs
    #[error("Invalid command input: {0}")]
    InvalidInput(String),

    /// The registry API call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CommandError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if the registry refused the call for lack of permissions
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Client(err) if err.is_access_denied())
    }
}

/// A single stage of the cleanup chain
#[async_trait]
pub trait Command: Send + Sync {
    /// Name reported when the command starts
    fn name(&self) -> &'static str;

    /// Executes the command
    ///
    /// # Arguments
    /// * `client` - Registry client shared by the whole chain
    /// * `input` - Output of the previous command, `None` for the first one
    ///
    /// # Returns
    /// The input for the next command, `None` for a terminal stage
    async fn execute(
        &self,
        client: &dyn RegistryClient,
        input: Option<StageOutput>,
    ) -> Result<Option<StageOutput>, CommandError>;
}

/// The commands making up one cleanup run, in execution order
pub fn cleanup_chain() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(DescribeRegistry),
        Box::new(ListRepositories),
        Box::new(RemoveAllUntaggedImages),
    ]
}
