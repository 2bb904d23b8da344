//! Response types (Serialize)

use serde::{Deserialize, Serialize};

pub const PROGRESS_UPDATED_MESSAGE: &str = "Progress updated successfully!";

/// Body returned by the in-place progress update.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressUpdateResponse {
    pub message: String,
    pub progress: String,
}

impl ProgressUpdateResponse {
    pub fn new(progress: String) -> Self {
        Self { message: PROGRESS_UPDATED_MESSAGE.to_owned(), progress }
    }
}
