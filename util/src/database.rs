//! Interpretation of the `DATABASE_PATH` setting.
//!
//! The value is either a full connection URL, used as-is, or a plain SQLite
//! file path.

use std::path::Path;

const URL_SCHEMES: [&str; 3] = ["sqlite:", "postgres://", "mysql://"];

pub fn is_connection_url(value: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| value.starts_with(scheme))
}

/// The SQLite file behind `value`, or `None` when `value` is a connection URL.
pub fn sqlite_file_path(value: &str) -> Option<&Path> {
    if is_connection_url(value) {
        None
    } else {
        Some(Path::new(value))
    }
}

/// Turns the configured value into a connection URL.
///
/// A plain path gets its parent directories created, since SQLite won't, and
/// `mode=rwc` so the file is created on first connect.
pub fn database_url(value: &str) -> String {
    let Some(path) = sqlite_file_path(value) else {
        return value.to_owned();
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create {}: {e}", parent.display());
            }
        }
    }
    format!("sqlite://{value}?mode=rwc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dsn_is_passed_through() {
        let dsn = "sqlite:///tmp/blog/dsn.db?mode=rwc";
        assert_eq!(database_url(dsn), dsn);
        assert_eq!(database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(database_url("postgres://localhost/blog"), "postgres://localhost/blog");
    }

    #[test]
    fn dsn_has_no_file_to_remove() {
        assert!(sqlite_file_path("sqlite:///tmp/blog/dsn.db?mode=rwc").is_none());
        assert_eq!(sqlite_file_path("data/blog.db"), Some(Path::new("data/blog.db")));
    }

    #[test]
    fn file_path_becomes_sqlite_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blog.db");
        let path = path.to_str().unwrap();

        assert_eq!(database_url(path), format!("sqlite://{path}?mode=rwc"));
        assert!(dir.path().join("nested").is_dir());
    }
}
