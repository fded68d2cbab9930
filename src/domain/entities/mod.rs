//! Core domain entities representing the business data model.
//!
//! - [`UrlMapping`] - A stored short identifier → original URL pair
//! - [`NewUrlMapping`] - Insert payload for a new mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
