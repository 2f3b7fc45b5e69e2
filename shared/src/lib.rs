//! ResQLink Shared Library
//!
//! This crate contains the wire types shared by the profile service and
//! its clients: the JSON models for users, profiles and health cards, and
//! the request/response bodies of the HTTP API.

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::{HealthCard, Profile, ProfileWithHealthCard};
pub use types::*;
