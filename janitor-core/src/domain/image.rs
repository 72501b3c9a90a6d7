//! Image domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag status used to filter image listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagStatus {
    Tagged,
    Untagged,
    Any,
}

/// Filter applied when listing the images of a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilter {
    pub tag_status: Option<TagStatus>,
}

impl ImageFilter {
    /// Matches only images that no tag points to
    pub fn untagged() -> Self {
        Self {
            tag_status: Some(TagStatus::Untagged),
        }
    }
}

/// Identifies an image by digest, tag, or both
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageId {
    pub image_digest: Option<String>,
    pub image_tag: Option<String>,
}

impl ImageId {
    pub fn digest(digest: impl Into<String>) -> Self {
        Self {
            image_digest: Some(digest.into()),
            image_tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.image_tag = Some(tag.into());
        self
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.image_digest, &self.image_tag) {
            (Some(digest), Some(tag)) => write!(f, "{digest}:{tag}"),
            (Some(digest), None) => f.write_str(digest),
            (None, Some(tag)) => write!(f, "<no digest>:{tag}"),
            (None, None) => f.write_str("<unidentified image>"),
        }
    }
}

/// Result of listing the images of a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageList {
    #[serde(default)]
    pub image_ids: Vec<ImageId>,
}

impl FromIterator<ImageId> for ImageList {
    fn from_iter<I: IntoIterator<Item = ImageId>>(iter: I) -> Self {
        Self {
            image_ids: iter.into_iter().collect(),
        }
    }
}

/// An image the registry refused to delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFailure {
    pub image_id: Option<ImageId>,
    pub failure_code: Option<String>,
    pub failure_reason: Option<String>,
}

/// Result of a batch image deletion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedImages {
    #[serde(default)]
    pub image_ids: Vec<ImageId>,
    #[serde(default)]
    pub failures: Vec<ImageFailure>,
}

impl DeletedImages {
    /// Appends the outcome of another batch to this one
    pub fn merge(&mut self, other: DeletedImages) {
        self.image_ids.extend(other.image_ids);
        self.failures.extend(other.failures);
    }
}
