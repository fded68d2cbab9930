//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for (de)serialization and validator for input validation.

pub mod greeting;
pub mod shorten;
