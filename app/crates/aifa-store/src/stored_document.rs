use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// On-disk layout of the file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub schema_version: i32,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Default for StoredDocument {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            values: BTreeMap::new(),
        }
    }
}
