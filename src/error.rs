//! Catalog error taxonomy
//!
//! The input domain is closed and static, so the taxonomy is small: a broken
//! internal reference (caught at construction), an unknown genre label, or an
//! hour outside the clock range. Nothing here is transient or retryable.

use thiserror::Error;

/// Errors surfaced by catalog construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A mapped theme name does not exist in the catalog. Only reachable
    /// from construction; validated catalogs never produce this.
    #[error("theme \"{name}\" is not in the catalog")]
    NotFound { name: String },

    /// The caller supplied a genre label outside the fixed domain.
    #[error("unknown writing genre \"{genre}\"")]
    UnknownGenre { genre: String },

    /// The caller supplied an hour outside 0-23.
    #[error("hour {hour} is outside 0-23")]
    InvalidHour { hour: i32 },
}
