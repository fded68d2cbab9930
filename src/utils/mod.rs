//! Utility functions for URL inspection, identifier parsing, and error classification.
//!
//! - [`url_host`] - Host extraction from submitted URLs
//! - [`short_id`] - Parsing of the short identifier path segment
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod short_id;
pub mod url_host;
