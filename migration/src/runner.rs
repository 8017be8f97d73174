use colored::*;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration in order, printing one status line each.
///
/// Each migration is applied and recorded through `Migrator::up`, so a second
/// run finds nothing pending. Stops at the first failure and returns its error.
pub async fn run_all_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::install(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    if pending.is_empty() {
        println!("Nothing to migrate.");
        return Ok(());
    }

    println!("Running migrations...");
    for migration in &pending {
        run_migration(db, migration.name()).await?;
    }

    Ok(())
}

async fn run_migration(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match Migrator::up(db, Some(1)).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(e) => {
            println!("{}", "failed".red());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, Statement};

    async fn table_names(db: &DatabaseConnection) -> Vec<String> {
        let rows = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await
            .unwrap();
        rows.iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect()
    }

    async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }

    async fn insert_blog_rows(db: &DatabaseConnection) {
        for sql in [
            "INSERT INTO users (username, email, display_name) VALUES ('u1', 'u1@example.com', 'U One')",
            "INSERT INTO tags (name) VALUES ('rust')",
            "INSERT INTO posts (user_id, title, body) VALUES (1, 't', 'b')",
            "INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1)",
        ] {
            db.execute_unprepared(sql).await.unwrap();
        }
    }

    #[tokio::test]
    async fn creates_all_blog_tables() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        run_all_migrations(&db).await.unwrap();

        let tables = table_names(&db).await;
        for expected in ["post_tags", "posts", "tags", "users"] {
            assert!(tables.contains(&expected.to_string()), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn applied_migrations_are_recorded_once() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        run_all_migrations(&db).await.unwrap();

        assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
        assert_eq!(count_rows(&db, "seaql_migrations").await, 4);

        run_all_migrations(&db).await.unwrap();
        assert_eq!(count_rows(&db, "seaql_migrations").await, 4);
    }

    #[tokio::test]
    async fn fresh_drops_seeded_rows_and_rebuilds_schema() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        run_all_migrations(&db).await.unwrap();
        insert_blog_rows(&db).await;

        Migrator::fresh(&db).await.unwrap();

        for table in ["post_tags", "posts", "tags", "users"] {
            assert_eq!(count_rows(&db, table).await, 0, "{table} not emptied");
        }
        assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn post_tags_rejects_duplicate_pairs() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        run_all_migrations(&db).await.unwrap();
        insert_blog_rows(&db).await;

        let dup = db
            .execute_unprepared("INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1)")
            .await;
        assert!(dup.is_err());
    }
}
