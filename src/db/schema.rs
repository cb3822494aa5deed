//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `categories` table keyed by the provider-assigned id (no surrogate key,
///   so repeated ingestion passes map to the same category)
/// - `questions` table with a store-assigned rowid key and a category FK;
///   answer options are stored as a JSON-encoded ordered list
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Categories (id is the provider's identifier, preserved verbatim)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

-- ---------------------------------------------------------------------------
-- Questions (rowid keys restart from 1 once the table is emptied, which is
-- how truncation resets identity between passes)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    question TEXT NOT NULL,
    correct_answer TEXT NOT NULL,
    options TEXT NOT NULL, -- JSON array, shuffled order as served
    difficulty TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category_id);
"#;
