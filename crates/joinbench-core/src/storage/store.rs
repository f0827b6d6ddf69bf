use crate::model::{NewPost, Post, PostAuthor};
use anyhow::Context;
use rusqlite::{params, params_from_iter, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    pub conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open sqlite db")?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> anyhow::Result<Self> {
        // SQLite in-memory DB
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn init_schema(&self) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(crate::storage::schema::DDL)?;
        Ok(())
    }

    /// Drops both tables and recreates them empty. Tables that are already
    /// absent are fine; any other storage failure bubbles up.
    pub fn reset(&self) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(crate::storage::schema::DROP_DDL)
            .context("dropping experiment tables")?;
        conn.execute_batch(crate::storage::schema::DDL)
            .context("recreating experiment tables")?;
        Ok(())
    }

    /// Single-transaction bulk insert. Returns the generated row ids in
    /// input order.
    pub fn insert_users(&self, names: &[String]) -> anyhow::Result<Vec<i64>> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(names.len());
        {
            let mut stmt = tx.prepare("INSERT INTO users(name) VALUES (?1)")?;
            for name in names {
                stmt.execute(params![name])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        Ok(ids)
    }

    pub fn insert_posts(&self, posts: &[NewPost]) -> anyhow::Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO posts(content, author_id) VALUES (?1, ?2)")?;
            for post in posts {
                stmt.execute(params![post.content, post.author_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// The engine-side join: one query, missing authors come back as NULL.
    pub fn posts_with_authors(&self) -> anyhow::Result<Vec<PostAuthor>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT p.id, u.name
             FROM posts p
             LEFT JOIN users u ON u.id = p.author_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(PostAuthor {
                post_id: row.get(0)?,
                author_name: row.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn all_posts(&self) -> anyhow::Result<Vec<Post>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, content, author_id FROM posts")?;
        let rows = stmt.query_map([], |row| {
            Ok(Post {
                id: row.get(0)?,
                content: row.get(1)?,
                author_id: row.get(2)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// One `IN (...)` probe. Callers chunk their id sets so a single call
    /// stays under the SQLite bound-parameter limit.
    pub fn user_names_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<(i64, String)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn.lock().unwrap();
        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!("SELECT id, name FROM users WHERE id IN ({})", placeholders);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        let conn = self.conn.lock().unwrap();
        // Validation to prevent SQL injection (simple allowlist)
        if !["users", "posts"].contains(&table) {
            anyhow::bail!("Invalid table name for count_rows: {}", table);
        }
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let n: i64 = conn.query_row(&sql, [], |r| r.get(0))?;
        Ok(n)
    }
}
