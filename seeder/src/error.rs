use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// A create or attach was rejected by the database (constraint violation,
    /// missing table, lost connection).
    #[error("persistence failure: {0}")]
    Persistence(#[from] DbErr),

    #[error("need at least {needed} tags to sample from, found {available}")]
    NotEnoughTags { available: usize, needed: usize },
}
