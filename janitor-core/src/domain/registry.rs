//! Registry domain types

use serde::{Deserialize, Serialize};

/// Description of the registry owned by the current account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDescriptor {
    pub registry_id: Option<String>,
}

impl RegistryDescriptor {
    pub fn new(registry_id: impl Into<String>) -> Self {
        Self {
            registry_id: Some(registry_id.into()),
        }
    }
}
