/// Relational fixtures for the join experiment. `author_id` is nullable and
/// a post's reference may dangle after its user row is gone; both join
/// strategies must resolve such rows to the same answer.
pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS posts (
    id        INTEGER PRIMARY KEY,
    content   TEXT NOT NULL,
    author_id INTEGER REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_posts_author_id ON posts(author_id);
"#;

/// Inverse of [`DDL`]. Children first so the drop order never trips a
/// foreign-key check.
pub const DROP_DDL: &str = r#"
DROP TABLE IF EXISTS posts;
DROP TABLE IF EXISTS users;
"#;
