//! Image-related API calls

use crate::EcrClient;
use crate::error::{ClientError, Result};
use aws_sdk_ecr::types::{
    ImageFailure as SdkImageFailure, ImageIdentifier, ListImagesFilter, TagStatus as SdkTagStatus,
};
use janitor_core::domain::image::{
    DeletedImages, ImageFailure, ImageFilter, ImageId, ImageList, TagStatus,
};
use tracing::debug;

/// Largest number of image ids accepted by a single BatchDeleteImage call
const MAX_BATCH_DELETE_IMAGES: usize = 100;

impl EcrClient {
    /// List the images of a repository matching `filter`, following pagination
    pub(crate) async fn fetch_images(
        &self,
        repository_name: &str,
        filter: ImageFilter,
    ) -> Result<ImageList> {
        let image_ids = self
            .client
            .list_images()
            .repository_name(repository_name)
            .filter(filter_to_sdk(filter))
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(|e| ClientError::request_failed("ListImages", e))?;

        debug!(
            "Listed {} image(s) in {} with filter {:?}",
            image_ids.len(),
            repository_name,
            filter
        );

        Ok(image_ids.iter().map(image_id_from_sdk).collect())
    }

    /// Delete images from a repository
    ///
    /// The ids are sent in batches of at most [`MAX_BATCH_DELETE_IMAGES`];
    /// the per-batch outcomes are merged. An empty list makes no call.
    pub(crate) async fn delete_images(
        &self,
        repository_name: &str,
        image_ids: Vec<ImageId>,
    ) -> Result<DeletedImages> {
        let mut deleted = DeletedImages::default();

        for batch in image_ids.chunks(MAX_BATCH_DELETE_IMAGES) {
            let output = self
                .client
                .batch_delete_image()
                .repository_name(repository_name)
                .set_image_ids(Some(batch.iter().map(image_id_to_sdk).collect()))
                .send()
                .await
                .map_err(|e| ClientError::request_failed("BatchDeleteImage", e))?;

            debug!(
                "Deleted {} of {} image(s) from {}",
                output.image_ids().len(),
                batch.len(),
                repository_name
            );

            deleted.merge(DeletedImages {
                image_ids: output.image_ids().iter().map(image_id_from_sdk).collect(),
                failures: output.failures().iter().map(image_failure_from_sdk).collect(),
            });
        }

        Ok(deleted)
    }
}

fn filter_to_sdk(filter: ImageFilter) -> ListImagesFilter {
    let tag_status = filter.tag_status.map(|status| match status {
        TagStatus::Tagged => SdkTagStatus::Tagged,
        TagStatus::Untagged => SdkTagStatus::Untagged,
        TagStatus::Any => SdkTagStatus::Any,
    });

    ListImagesFilter::builder().set_tag_status(tag_status).build()
}

pub(crate) fn image_id_from_sdk(image: &ImageIdentifier) -> ImageId {
    ImageId {
        image_digest: image.image_digest().map(str::to_string),
        image_tag: image.image_tag().map(str::to_string),
    }
}

pub(crate) fn image_id_to_sdk(image: &ImageId) -> ImageIdentifier {
    ImageIdentifier::builder()
        .set_image_digest(image.image_digest.clone())
        .set_image_tag(image.image_tag.clone())
        .build()
}

fn image_failure_from_sdk(failure: &SdkImageFailure) -> ImageFailure {
    ImageFailure {
        image_id: failure.image_id().map(image_id_from_sdk),
        failure_code: failure.failure_code().map(|code| code.as_str().to_string()),
        failure_reason: failure.failure_reason().map(str::to_string),
    }
}
