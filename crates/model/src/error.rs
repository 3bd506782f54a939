//! Error types for the model crate.

use thiserror::Error;

/// Returned when something tries to fill a `GenreCatalog` a second time.
///
/// The catalog is fetched once per session and is immutable afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Genre catalog already populated with {existing} genres")]
pub struct CatalogAlreadyPopulated {
    pub existing: usize,
}
