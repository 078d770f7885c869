use crate::storage::SavedFile;
use serde::{Serialize, Deserialize};

/// Wire shape of one ingested file in the multi-upload response.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Derived name the file is stored under.
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    /// MIME type as declared by the client, not verified.
    pub mime_type: Option<String>,
}

impl From<SavedFile> for FileDescriptor {
    fn from(saved: SavedFile) -> Self {
        Self {
            filename: saved.stored_name,
            original_name: saved.original_name,
            size: saved.size,
            mime_type: saved.mime_type,
        }
    }
}
