//! The state cell shared by the catalog loader and the requester.

use thiserror::Error;
use tracing::warn;

use api_client::ApiError;
use model::{GenreCatalog, GenreId, Recommendation};

/// Shown to the user whenever a recommendation request fails.
pub const BACKEND_UNAVAILABLE_NOTICE: &str =
    "Oops! The recommendation engine is not running or returned an error.";

/// Why a recommendation request settled without a movie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationFailure {
    /// Network error, non-success status or malformed body
    #[error("{0}")]
    Backend(String),

    /// The request future was dropped before the backend answered
    #[error("Request abandoned before the backend answered")]
    Abandoned,
}

impl RecommendationFailure {
    /// Human readable text for the user. The cause goes to the logs.
    pub fn notice(&self) -> &'static str {
        BACKEND_UNAVAILABLE_NOTICE
    }
}

impl From<ApiError> for RecommendationFailure {
    fn from(err: ApiError) -> Self {
        RecommendationFailure::Backend(err.to_string())
    }
}

/// Final result of one recommendation request.
pub type Settlement = Result<Recommendation, RecommendationFailure>;

/// Lifecycle of the recommendation request.
///
/// A previous recommendation only survives inside `Settled`, so entering
/// `Loading` discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Settled(Settlement),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            RequestState::Settled(Ok(movie)) => Some(movie),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&RecommendationFailure> {
        match self {
            RequestState::Settled(Err(failure)) => Some(failure),
            _ => None,
        }
    }
}

/// Errors from an explicit genre selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("The genre list has not been loaded yet")]
    CatalogNotLoaded,

    #[error("Unknown genre: {0}")]
    UnknownGenre(GenreId),
}

/// Everything a renderer needs to draw the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub catalog: GenreCatalog,
    pub selected: Option<GenreId>,
    pub request: RequestState,
}

impl ViewState {
    /// Store the fetched catalog and default the selection to its first entry.
    ///
    /// Returns whether anything changed. A second catalog is ignored.
    pub(crate) fn apply_catalog(&mut self, genres: Vec<GenreId>) -> bool {
        if let Err(err) = self.catalog.populate(genres) {
            warn!("Ignoring second genre catalog: {}", err);
            return false;
        }
        if self.selected.is_none() {
            self.selected = self.catalog.first().cloned();
        }
        true
    }

    /// Record an explicit user choice.
    pub(crate) fn select(&mut self, genre: GenreId) -> Result<bool, SelectionError> {
        if self.catalog.is_empty() {
            return Err(SelectionError::CatalogNotLoaded);
        }
        if !self.catalog.contains(&genre) {
            return Err(SelectionError::UnknownGenre(genre));
        }
        if self.selected.as_ref() == Some(&genre) {
            return Ok(false);
        }
        self.selected = Some(genre);
        Ok(true)
    }
}
