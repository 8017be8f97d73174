use migration::runner;
use sea_orm::Database;
use std::{env, fs, process};
use util::{config, database};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = config::database_path();
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            migrate(&db_path).await
        }
        None | Some("up") => migrate(&db_path).await,
        Some(other) => {
            eprintln!("Unknown command '{other}'. Usage: migration [up|fresh|clean]");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Migration failed: {e}");
        process::exit(1);
    }
}

async fn migrate(db_path: &str) -> Result<(), sea_orm::DbErr> {
    let db = Database::connect(&database::database_url(db_path)).await?;
    runner::run_all_migrations(&db).await
}

/// Deletes the SQLite file. A connection URL is left alone.
fn remove_db_file(db_path: &str) {
    let Some(path) = database::sqlite_file_path(db_path) else {
        println!("DATABASE_PATH is a connection URL, not removing anything");
        return;
    };

    if path.exists() {
        match fs::remove_file(path) {
            Ok(()) => println!("Deleted DB: {}", path.display()),
            Err(e) => eprintln!("Failed to delete DB {}: {e}", path.display()),
        }
    } else {
        println!("DB file does not exist: {}", path.display());
    }
}
