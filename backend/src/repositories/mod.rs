//! Database repositories
//!
//! Provides data access layer for database operations. Every function takes
//! any Postgres executor, so callers decide whether a statement runs on a
//! pooled connection or inside a transaction.

pub mod health_card;
pub mod profile;
pub mod user;

pub use health_card::{HealthCardRecord, HealthCardRepository};
pub use profile::{CreateProfile, ProfileRecord, ProfileRepository, UpsertProfile};
pub use user::{UserRecord, UserRepository};
