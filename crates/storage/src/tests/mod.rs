//! Test utilities and module declarations for storage tests.

use crate::Storage;
use problem_tracker_core::ProblemInput;
use tempfile::TempDir;

mod problem_tests;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn leak_input() -> ProblemInput {
    ProblemInput::new("Leak", "Pipe leak", "", "Not Started", "High")
}

pub const TEST_DATE: &str = "2024-01-07 10:00:00";
