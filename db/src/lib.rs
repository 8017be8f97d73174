pub mod factories;
pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, database};

pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database::database_url(&config::database_path());
    log::debug!("Connecting to {url}");
    Database::connect(&url).await
}
