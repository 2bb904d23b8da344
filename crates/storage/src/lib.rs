//! Storage layer for problem-tracker
//!
//! `SQLite` record store for problem reports plus the upload directory the
//! records point into.

mod error;
pub mod media;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::{Result, StorageError};
pub use media::MediaStore;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
