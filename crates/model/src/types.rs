//! Core domain types shared by the API client and the session core.
//!
//! Everything here mirrors the JSON contract of the recommendation backend.
//! The backend speaks Spanish on the wire (`titulo`, `generos`, ...), so the
//! structs use English field names and serde renames.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogAlreadyPopulated;
use crate::field::Field;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique identifier for a movie on the backend
pub type MovieId = u64;

/// Opaque identifier of a genre category.
///
/// The set of valid values is owned by the backend. The client never
/// interprets the string, it only lists, compares and sends it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GenreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GenreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GenreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// Movie / Recommendation
// =============================================================================

/// A movie record as returned by `/recomendar` and `/peliculas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "pelicula_id")]
    pub id: MovieId,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Comma separated free text, e.g. `"Action, Adventure"`
    #[serde(rename = "generos")]
    pub genres: String,
    pub director: Option<String>,
    /// The backend may send the key with a value, send `null`, or omit it.
    ///
    /// Rust concept: a three-state enum keeps "missing" and "null" apart,
    /// which a plain `Option<T>` would collapse.
    #[serde(rename = "actores", default, skip_serializing_if = "Field::is_absent")]
    pub cast: Field<String>,
    #[serde(rename = "anio")]
    pub year: Option<i32>,
    /// Always true for anything the public endpoints return
    #[serde(rename = "activa")]
    pub active: bool,
}

/// The payload of a successful recommendation request.
pub type Recommendation = Movie;

impl Movie {
    /// Split the free-text genre column into its pieces.
    ///
    /// The backend joins genres with `", "`; empty pieces are dropped.
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// Title followed by the year in parentheses when the year is known.
    pub fn headline(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

// =============================================================================
// Movie listing
// =============================================================================

/// One page of the public movie listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePage {
    pub items: Vec<Movie>,
    pub total_items: u64,
    pub pages: u64,
    pub current_page: u32,
}

/// Filters for the public movie listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub page: u32,
    pub per_page: u32,
    /// Substring match on title or director
    pub search: Option<String>,
    pub genre: Option<GenreId>,
}

impl MovieQuery {
    pub const DEFAULT_PER_PAGE: u32 = 20;

    /// Query parameters in the order the backend documents them.
    ///
    /// Unset filters are left out entirely rather than sent empty.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(genre) = &self.genre {
            params.push(("genero", genre.to_string()));
        }
        params
    }
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
            search: None,
            genre: None,
        }
    }
}

// =============================================================================
// GenreCatalog
// =============================================================================

/// Ordered list of genres, filled exactly once per session.
///
/// An empty catalog is either "not loaded yet" or "loaded but the backend
/// has no genres"; `is_populated` tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCatalog {
    genres: Vec<GenreId>,
    populated: bool,
}

impl GenreCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the catalog. A second call is rejected and changes nothing.
    pub fn populate(&mut self, genres: Vec<GenreId>) -> Result<(), CatalogAlreadyPopulated> {
        if self.populated {
            return Err(CatalogAlreadyPopulated {
                existing: self.genres.len(),
            });
        }
        self.genres = genres;
        self.populated = true;
        Ok(())
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn first(&self) -> Option<&GenreId> {
        self.genres.first()
    }

    pub fn contains(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreId> {
        self.genres.iter()
    }

    pub fn as_slice(&self) -> &[GenreId] {
        &self.genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mad_max() -> Movie {
        Movie {
            id: 7,
            title: "Mad Max".to_string(),
            genres: "Action, Sci-Fi".to_string(),
            director: Some("George Miller".to_string()),
            cast: Field::Null,
            year: Some(1979),
            active: true,
        }
    }

    #[test]
    fn test_decode_recommendation_payload() {
        let body = r#"{"pelicula_id":7,"titulo":"Mad Max","generos":"Action","director":"George Miller","actores":null,"anio":1979,"activa":true}"#;
        let movie: Recommendation = serde_json::from_str(body).unwrap();

        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "Mad Max");
        assert_eq!(movie.director.as_deref(), Some("George Miller"));
        assert_eq!(movie.cast, Field::Null);
        assert_eq!(movie.year, Some(1979));
        assert!(movie.active);
    }

    #[test]
    fn test_cast_absent_vs_present() {
        let absent = r#"{"pelicula_id":1,"titulo":"A","generos":"Drama","director":null,"anio":null,"activa":true}"#;
        let present = r#"{"pelicula_id":1,"titulo":"A","generos":"Drama","director":null,"actores":"Someone","anio":null,"activa":true}"#;

        let absent: Movie = serde_json::from_str(absent).unwrap();
        let present: Movie = serde_json::from_str(present).unwrap();

        assert_eq!(absent.cast, Field::Absent);
        assert_eq!(present.cast, Field::Present("Someone".to_string()));
        assert_eq!(absent.director, None);
        assert_eq!(absent.year, None);
    }

    #[test]
    fn test_serialize_keeps_wire_names_and_skips_absent_cast() {
        let mut movie = mad_max();
        movie.cast = Field::Absent;
        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["titulo"], "Mad Max");
        assert_eq!(value["anio"], 1979);
        assert!(value.get("actores").is_none());

        movie.cast = Field::Null;
        let value = serde_json::to_value(&movie).unwrap();
        assert!(value["actores"].is_null());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let body = r#"{"pelicula_id":7,"generos":"Action","director":null,"anio":null,"activa":true}"#;
        assert!(serde_json::from_str::<Movie>(body).is_err());
    }

    #[test]
    fn test_genre_list_and_headline() {
        let mut movie = mad_max();
        assert_eq!(movie.genre_list(), vec!["Action", "Sci-Fi"]);
        assert_eq!(movie.headline(), "Mad Max (1979)");

        movie.year = None;
        movie.genres = "Drama,, ".to_string();
        assert_eq!(movie.headline(), "Mad Max");
        assert_eq!(movie.genre_list(), vec!["Drama"]);
    }

    #[test]
    fn test_catalog_populates_once() {
        let mut catalog = GenreCatalog::new();
        assert!(!catalog.is_populated());
        assert!(catalog.is_empty());

        catalog
            .populate(vec!["Action".into(), "Comedy".into()])
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first(), Some(&GenreId::new("Action")));

        let err = catalog.populate(vec!["Drama".into()]).unwrap_err();
        assert_eq!(err.existing, 2);
        assert!(!catalog.contains(&GenreId::new("Drama")));
    }

    #[test]
    fn test_movie_query_params() {
        let query = MovieQuery::default();
        assert_eq!(
            query.to_params(),
            vec![("page", "1".to_string()), ("per_page", "20".to_string())]
        );

        let query = MovieQuery {
            page: 3,
            per_page: 5,
            search: Some("max".to_string()),
            genre: Some(GenreId::new("Action")),
        };
        let params = query.to_params();
        assert_eq!(params.len(), 4);
        assert_eq!(params[2], ("search", "max".to_string()));
        assert_eq!(params[3], ("genero", "Action".to_string()));
    }
}
