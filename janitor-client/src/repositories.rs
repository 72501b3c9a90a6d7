//! Repository-related API calls

use crate::EcrClient;
use crate::error::{ClientError, Result};
use aws_sdk_ecr::types::Repository as SdkRepository;
use chrono::{DateTime, Utc};
use janitor_core::domain::repository::{Repository, RepositoryList};
use tracing::debug;

impl EcrClient {
    /// List every repository of a registry, following pagination
    pub(crate) async fn fetch_repositories(&self, registry_id: &str) -> Result<RepositoryList> {
        if registry_id.is_empty() {
            return Err(ClientError::InvalidRequest(
                "registry_id cannot be empty".to_string(),
            ));
        }

        let repositories = self
            .client
            .describe_repositories()
            .registry_id(registry_id)
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(|e| ClientError::request_failed("DescribeRepositories", e))?;

        debug!(
            "Registry {} has {} repositories",
            registry_id,
            repositories.len()
        );

        Ok(repositories.iter().map(repository_from_sdk).collect())
    }
}

pub(crate) fn repository_from_sdk(repository: &SdkRepository) -> Repository {
    Repository {
        repository_name: repository.repository_name().map(str::to_string),
        repository_arn: repository.repository_arn().map(str::to_string),
        registry_id: repository.registry_id().map(str::to_string),
        repository_uri: repository.repository_uri().map(str::to_string),
        image_tag_mutability: repository
            .image_tag_mutability()
            .map(|mutability| mutability.as_str().to_string()),
        created_at: repository.created_at().and_then(|created_at| {
            DateTime::<Utc>::from_timestamp(created_at.secs(), created_at.subsec_nanos())
        }),
    }
}
