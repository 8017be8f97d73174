use crate::error::SeedError;
use crate::seed::{Seeder, run_seeder};
use crate::seeds::user::UserSeeder;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use std::{env, process};
use util::config::AppConfig;

mod error;
mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let (log_level, log_file, log_to_stdout) = {
        let cfg = AppConfig::global();
        (cfg.log_level.clone(), cfg.log_file.clone(), cfg.log_to_stdout)
    };
    if let Err(e) = common::logger::init_logger(&log_level, &log_file, log_to_stdout) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let fresh = match env::args().nth(1).as_deref() {
        None => false,
        Some("fresh") => true,
        Some(other) => {
            eprintln!("Unknown command '{other}'. Usage: seeder [fresh]");
            process::exit(2);
        }
    };

    log::info!(
        "Seeding {} ({}) into {}",
        util::config::project_name(),
        util::config::app_env(),
        util::config::database_path()
    );

    let result = match db::connect().await {
        Ok(db) => run(&db, fresh).await,
        Err(e) => Err(SeedError::from(e)),
    };

    if let Err(e) = result {
        log::error!("Seeding aborted: {e}");
        eprintln!("Seeding aborted: {e}");
        process::exit(1);
    }
}

/// Brings the schema up to date. `fresh` drops every table first.
async fn prepare_schema(db: &DatabaseConnection, fresh: bool) -> Result<(), DbErr> {
    if fresh {
        log::info!("Dropping all tables and re-running migrations");
        Migrator::fresh(db).await
    } else {
        Migrator::up(db, None).await
    }
}

async fn run(db: &DatabaseConnection, fresh: bool) -> Result<(), SeedError> {
    prepare_schema(db, fresh).await?;

    for (seeder, name) in [
        (Box::new(UserSeeder::from_config()) as Box<dyn Seeder + Send + Sync>, "User"),
    ] {
        run_seeder(&*seeder, name, db).await?;
    }

    Ok(())
}
