use std::sync::Arc;

use chrono::Local;
use problem_tracker_core::{AppConfig, DATE_FORMAT, ImageUpload, ProblemInput, ProblemRecord};
use problem_tracker_export::{ExportSummary, ReportExporter};
use problem_tracker_storage::{MediaStore, Storage};

use crate::ServiceError;

/// Application context: record store, upload directory and report exporter.
///
/// All methods are synchronous; async callers run them on the blocking pool.
#[derive(Debug, Clone)]
pub struct ProblemService {
    storage: Arc<Storage>,
    media: MediaStore,
    exporter: ReportExporter,
}

impl ProblemService {
    #[must_use]
    pub fn new(storage: Arc<Storage>, media: MediaStore, exporter: ReportExporter) -> Self {
        Self { storage, media, exporter }
    }

    /// Open the database, create the upload directory and wire the exporter.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(problem_tracker_storage::StorageError::from)?;
        }
        let storage = Arc::new(Storage::with_pool_size(&config.db_path, config.db_pool_size)?);
        let media = MediaStore::open(&config.upload_dir)?;
        let exporter = ReportExporter::new(media.clone(), &config.export_path);
        Ok(Self::new(storage, media, exporter))
    }

    pub fn media(&self) -> &MediaStore {
        &self.media
    }

    pub fn exporter(&self) -> &ReportExporter {
        &self.exporter
    }

    /// All problems, newest first.
    pub fn list(&self) -> Result<Vec<ProblemRecord>, ServiceError> {
        Ok(self.storage.list_problems()?)
    }

    pub fn get(&self, id: i64) -> Result<ProblemRecord, ServiceError> {
        self.storage.get_problem(id)?.ok_or(ServiceError::NotFound { id })
    }

    pub fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.count_problems()?)
    }

    /// Store the upload (if any), stamp the creation time and insert.
    ///
    /// The image is written before the row; a failed insert leaves the file behind.
    pub fn create(
        &self,
        input: &ProblemInput,
        upload: Option<ImageUpload>,
    ) -> Result<i64, ServiceError> {
        let image = self.store_upload(upload)?;
        let date = Local::now().format(DATE_FORMAT).to_string();
        let id = self.storage.create_problem(input, image.as_deref(), &date)?;
        tracing::info!(id, category = %input.category, image = ?image, "Problem created");
        Ok(id)
    }

    /// Apply every editable field. Without an upload the image reference is kept;
    /// with one it is replaced and the previous file stays on disk.
    pub fn update(
        &self,
        id: i64,
        input: &ProblemInput,
        upload: Option<ImageUpload>,
    ) -> Result<bool, ServiceError> {
        let image = self.store_upload(upload)?;
        let updated = self.storage.update_problem(id, input, image.as_deref())?;
        if updated {
            tracing::info!(id, image = ?image, "Problem updated");
        } else {
            tracing::debug!(id, "Update matched no problem");
        }
        Ok(updated)
    }

    pub fn update_progress(&self, id: i64, progress: &str) -> Result<bool, ServiceError> {
        let updated = self.storage.update_problem_progress(id, progress)?;
        tracing::debug!(id, progress, updated, "Progress patched");
        Ok(updated)
    }

    /// Remove the row. The referenced image file is left in the media directory.
    pub fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self.storage.delete_problem(id)?;
        tracing::info!(id, deleted, "Problem delete requested");
        Ok(deleted)
    }

    /// Regenerate the spreadsheet from the current table, newest first.
    pub fn export_report(&self) -> Result<ExportSummary, ServiceError> {
        let problems = self.storage.list_problems()?;
        Ok(self.exporter.export(&problems)?)
    }

    fn store_upload(&self, upload: Option<ImageUpload>) -> Result<Option<String>, ServiceError> {
        match upload {
            Some(upload) if !upload.file_name.is_empty() => {
                Ok(Some(self.media.save(&upload.file_name, &upload.bytes)?))
            },
            _ => Ok(None),
        }
    }
}
