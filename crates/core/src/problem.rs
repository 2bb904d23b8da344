use serde::{Deserialize, Serialize};

use crate::DEFAULT_PRIORITY;

/// A single problem report as stored in the `problems` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Auto-assigned row id, never reused after delete
    pub id: i64,
    pub category: String,
    pub description: String,
    /// Filename inside the media directory, if an image was ever attached
    pub image: Option<String>,
    /// Creation timestamp (`%Y-%m-%d %H:%M:%S`, server-local), immutable
    pub date: String,
    pub comment: Option<String>,
    /// Free-text status label such as "Not Started" or "Done"
    pub progress: String,
    pub priority: String,
}

impl ProblemRecord {
    /// Comment to show in reports: absent and empty comments collapse to `None`.
    pub fn display_comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// Editable fields shared by create and full update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInput {
    pub category: String,
    pub description: String,
    pub comment: String,
    pub progress: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_owned()
}

impl ProblemInput {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        comment: impl Into<String>,
        progress: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            comment: comment.into(),
            progress: progress.into(),
            priority: priority.into(),
        }
    }
}

/// Uploaded image as received from a form: original filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes }
    }
}
