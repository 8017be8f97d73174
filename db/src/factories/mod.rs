//! Factories producing valid sample rows for each entity.
//!
//! `make` builds an unsaved `ActiveModel`; `create_many` persists a batch and
//! returns the stored models in creation order. All randomness is drawn from
//! the caller's RNG so a seeded RNG reproduces the same rows.

pub mod post_factory;
pub mod tag_factory;
pub mod user_factory;
