//! Repository domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of images within a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_name: Option<String>,
    pub repository_arn: Option<String>,
    pub registry_id: Option<String>,
    pub repository_uri: Option<String>,
    pub image_tag_mutability: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Creates a repository descriptor carrying only its name
    pub fn named(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: Some(repository_name.into()),
            ..Self::default()
        }
    }
}

/// Result of describing the repositories of a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryList {
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

impl RepositoryList {
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

impl FromIterator<Repository> for RepositoryList {
    fn from_iter<I: IntoIterator<Item = Repository>>(iter: I) -> Self {
        Self {
            repositories: iter.into_iter().collect(),
        }
    }
}
