//! # Recommendation Requester
//!
//! Drives the `Idle -> Loading -> Settled` cycle for one request at a time:
//! 1. Refuse synchronously when no genre is selected
//! 2. Refuse when a request is already in flight
//! 3. Enter `Loading`, dropping any previous recommendation
//! 4. Call `/recomendar` once for the selected genre
//! 5. Settle with the movie or with a user-facing failure
//!
//! Steps 1-3 happen in a single state update, so two callers racing for the
//! trigger can never both get past the guard.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use api_client::RecommenderApi;
use model::GenreId;

use crate::state::{RecommendationFailure, RequestState, Settlement, ViewState};

/// Why a request was refused before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestRejected {
    /// The text is the prompt shown to the user
    #[error("Please choose a genre first.")]
    NoGenreSelected,

    #[error("A recommendation request is already in progress")]
    AlreadyLoading,
}

#[derive(Clone)]
pub struct RecommendationRequester {
    api: Arc<dyn RecommenderApi>,
    state: Arc<watch::Sender<ViewState>>,
}

impl RecommendationRequester {
    pub(crate) fn new(api: Arc<dyn RecommenderApi>, state: Arc<watch::Sender<ViewState>>) -> Self {
        Self { api, state }
    }

    /// Request a recommendation for the currently selected genre.
    ///
    /// # Returns
    /// * `Ok(settlement)` - The request ran; the same settlement is in the state
    /// * `Err(RequestRejected)` - Nothing was sent and the state is untouched
    pub async fn request_recommendation(&self) -> Result<Settlement, RequestRejected> {
        let mut started = Err(RequestRejected::NoGenreSelected);
        self.state.send_if_modified(|view| {
            started = begin(view);
            started.is_ok()
        });
        let genre = started.inspect_err(|rejected| debug!("Recommendation request refused: {}", rejected))?;

        info!("Requesting a recommendation for genre {}", genre);
        let guard = LoadingGuard::arm(&self.state);

        let settlement = self
            .api
            .fetch_recommendation(&genre)
            .await
            .map_err(|err| {
                warn!("Recommendation request for {} failed: {}", genre, err);
                RecommendationFailure::from(err)
            });

        if let Ok(movie) = &settlement {
            info!("Recommended \"{}\" for genre {}", movie.title, genre);
        }
        guard.settle(settlement.clone());
        Ok(settlement)
    }
}

/// Guard checks plus the transition into `Loading`.
fn begin(view: &mut ViewState) -> Result<GenreId, RequestRejected> {
    let genre = view
        .selected
        .clone()
        .ok_or(RequestRejected::NoGenreSelected)?;
    if view.request.is_loading() {
        return Err(RequestRejected::AlreadyLoading);
    }
    view.request = RequestState::Loading;
    Ok(genre)
}

/// Leaves `Loading` exactly once, even if the request future is dropped.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn arm(state: &'a watch::Sender<ViewState>) -> Self {
        Self { state, armed: true }
    }

    fn settle(mut self, settlement: Settlement) {
        self.armed = false;
        self.state.send_modify(|view| view.request = RequestState::Settled(settlement));
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Recommendation request dropped while loading");
        self.state.send_if_modified(|view| {
            if !view.request.is_loading() {
                return false;
            }
            view.request = RequestState::Settled(Err(RecommendationFailure::Abandoned));
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_requires_selection() {
        let mut view = ViewState::default();
        assert_eq!(begin(&mut view), Err(RequestRejected::NoGenreSelected));
        assert_eq!(view.request, RequestState::Idle);
    }

    #[test]
    fn test_begin_refuses_while_loading() {
        let mut view = ViewState {
            selected: Some(GenreId::new("Action")),
            request: RequestState::Loading,
            ..ViewState::default()
        };
        assert_eq!(begin(&mut view), Err(RequestRejected::AlreadyLoading));
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut view = ViewState {
            selected: Some(GenreId::new("Action")),
            request: RequestState::Settled(Err(RecommendationFailure::Abandoned)),
            ..ViewState::default()
        };
        assert_eq!(begin(&mut view), Ok(GenreId::new("Action")));
        assert_eq!(view.request, RequestState::Loading);
    }

    #[test]
    fn test_dropped_guard_settles_as_abandoned() {
        let (state, _rx) = watch::channel(ViewState {
            request: RequestState::Loading,
            ..ViewState::default()
        });

        drop(LoadingGuard::arm(&state));

        assert_eq!(
            state.borrow().request,
            RequestState::Settled(Err(RecommendationFailure::Abandoned))
        );
    }

    #[test]
    fn test_rejection_prompt() {
        assert_eq!(
            RequestRejected::NoGenreSelected.to_string(),
            "Please choose a genre first."
        );
    }
}
