//! Helpers for classifying database errors.

/// Name of the unique constraint on `urls.short_url`.
pub const SHORT_URL_CONSTRAINT: &str = "urls_short_url_key";

/// Returns true if the error is a unique violation on the short identifier.
pub fn is_unique_violation_on_short_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_URL_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation_on_short_url(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_short_url(
            &sqlx::Error::PoolClosed
        ));
    }
}
