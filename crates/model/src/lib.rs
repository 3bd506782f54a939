//! # Model Crate
//!
//! Domain and wire types for the ReelPicker client.
//!
//! ## Main Components
//!
//! - **types**: `GenreId`, `Movie`/`Recommendation`, `MoviePage`, `MovieQuery`, `GenreCatalog`
//! - **field**: `Field<T>`, an optional JSON field that keeps "absent" and "null" apart
//! - **error**: Error types for catalog mutation
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{GenreCatalog, Recommendation};
//!
//! let movie: Recommendation = serde_json::from_str(body)?;
//! println!("{}", movie.headline()); // "Mad Max (1979)"
//! ```

// Public modules
pub mod error;
pub mod field;
pub mod types;

// Re-export commonly used types for convenience
pub use error::CatalogAlreadyPopulated;
pub use field::Field;
pub use types::{
    // Identifiers
    GenreId,
    MovieId,
    // Records
    Movie,
    MoviePage,
    MovieQuery,
    Recommendation,
    // Collections
    GenreCatalog,
};
