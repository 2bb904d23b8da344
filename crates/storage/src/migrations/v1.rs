//! Migration v1: problems table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS problems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    image TEXT,
    date TEXT NOT NULL,
    comment TEXT,
    progress TEXT,
    priority TEXT DEFAULT 'Medium'
);
";
