//! Business logic services
//!
//! Services sequence repository calls for one endpoint and decide whether
//! the statements share a transaction.

pub mod profile;
pub mod user;

pub use profile::ProfileService;
pub use user::UserService;
