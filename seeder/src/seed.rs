use crate::error::SeedError;
use async_trait::async_trait;
use colored::*;
use sea_orm::DatabaseConnection;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Row counts written by one seeding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub tags: usize,
    pub users: usize,
    pub posts: usize,
    pub post_tags: usize,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tags, {} users, {} posts, {} post/tag links",
            self.tags, self.users, self.posts, self.post_tags
        )
    }
}

#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedSummary, SeedError>;
}

/// Runs one seeder behind a `Seeding <name>...... done (t)` status line.
///
/// The seeder's error is returned untouched; nothing already written is undone.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<SeedSummary, SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match seeder.seed(db).await {
        Ok(summary) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            log::info!("{name} seeder wrote {summary}");
            Ok(summary)
        }
        Err(e) => {
            println!("{}", "failed".red());
            log::error!("{name} seeder failed: {e}");
            Err(e)
        }
    }
}
