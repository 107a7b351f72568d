use crate::error::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    pub id: Option<i64>,
    pub received_at: String,
    pub user_agent: Option<String>,
}

impl DataRequest {
    pub fn received_now(user_agent: Option<String>) -> Self {
        Self {
            id: None,
            received_at: chrono::Utc::now().to_rfc3339(),
            user_agent,
        }
    }
}

/// Append-only SQLite log of requests for the complete survey data.
#[derive(Clone)]
pub struct RequestLog {
    db_path: Arc<PathBuf>,
}

impl RequestLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            CREATE TABLE IF NOT EXISTS data_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                received_at TEXT NOT NULL,
                user_agent TEXT
            );
            ",
        )?;

        Ok(Self {
            db_path: Arc::new(db_path),
        })
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&*self.db_path)?)
    }

    pub fn append(&self, request: &DataRequest) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO data_requests (received_at, user_agent) VALUES (?1, ?2)",
            params![request.received_at, request.user_agent],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn requests(&self) -> Result<Vec<DataRequest>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, received_at, user_agent
             FROM data_requests
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DataRequest {
                id: row.get(0)?,
                received_at: row.get(1)?,
                user_agent: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.connect()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM data_requests", [], |row| row.get(0))?)
    }
}
