use crate::StoredDocument;

/// Result of reading the store file - distinguishes "not found" from corruption.
#[derive(Debug)]
pub struct LoadResult {
    pub document: Option<StoredDocument>,
    /// Present if the file exists but could not be parsed
    pub corruption_error: Option<String>,
}
