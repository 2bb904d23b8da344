use problem_tracker_core::{ProblemInput, ProblemRecord};
use rusqlite::{OptionalExtension as _, Row, params};

use super::{Storage, get_conn};
use crate::error::Result;

const SELECT_COLUMNS: &str =
    "SELECT id, category, description, image, date, comment, progress, priority FROM problems";

impl Storage {
    /// Insert a new problem and return its id.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn create_problem(
        &self,
        input: &ProblemInput,
        image: Option<&str>,
        date: &str,
    ) -> Result<i64> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO problems (category, description, image, date, comment, progress, priority)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                input.category,
                input.description,
                image,
                date,
                input.comment,
                input.progress,
                input.priority,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get problem by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_problem(&self, id: i64) -> Result<Option<ProblemRecord>> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let record = conn.query_row(&sql, params![id], Self::row_to_problem).optional()?;
        Ok(record)
    }

    /// All problems, newest first.
    ///
    /// # Errors
    /// Returns error if database query fails or any row cannot be read.
    pub fn list_problems(&self) -> Result<Vec<ProblemRecord>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id DESC"))?;
        let results =
            stmt.query_map([], Self::row_to_problem)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(results)
    }

    /// Overwrite the editable fields. `image: None` keeps the stored reference.
    ///
    /// Returns whether a row matched `id`.
    ///
    /// # Errors
    /// Returns error if database update fails.
    pub fn update_problem(
        &self,
        id: i64,
        input: &ProblemInput,
        image: Option<&str>,
    ) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let affected = match image {
            Some(image) => conn.execute(
                "UPDATE problems
                 SET category = ?1, description = ?2, image = ?3, comment = ?4, progress = ?5, priority = ?6
                 WHERE id = ?7",
                params![
                    input.category,
                    input.description,
                    image,
                    input.comment,
                    input.progress,
                    input.priority,
                    id,
                ],
            )?,
            None => conn.execute(
                "UPDATE problems
                 SET category = ?1, description = ?2, comment = ?3, progress = ?4, priority = ?5
                 WHERE id = ?6",
                params![
                    input.category,
                    input.description,
                    input.comment,
                    input.progress,
                    input.priority,
                    id,
                ],
            )?,
        };
        Ok(affected > 0)
    }

    /// Change only the progress label.
    ///
    /// # Errors
    /// Returns error if database update fails.
    pub fn update_problem_progress(&self, id: i64, progress: &str) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let affected =
            conn.execute("UPDATE problems SET progress = ?1 WHERE id = ?2", params![progress, id])?;
        Ok(affected > 0)
    }

    /// Delete by id. Deleting an absent id is not an error.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_problem(&self, id: i64) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute("DELETE FROM problems WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Number of stored problems.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_problems(&self) -> Result<usize> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM problems", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn row_to_problem(row: &Row<'_>) -> rusqlite::Result<ProblemRecord> {
        Ok(ProblemRecord {
            id: row.get(0)?,
            category: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            image: row.get(3)?,
            date: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            comment: row.get(5)?,
            progress: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            priority: row
                .get::<_, Option<String>>(7)?
                .unwrap_or_else(|| problem_tracker_core::DEFAULT_PRIORITY.to_owned()),
        })
    }
}
