//! A mounted client session.
//!
//! Mounting creates the state cell, starts the one-shot catalog load and
//! wires the requester to the same cell. Dropping every `Session` handle
//! unmounts it.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use api_client::RecommenderApi;
use model::GenreId;

use crate::catalog::{CatalogTask, GenreCatalogLoader};
use crate::requester::{RecommendationRequester, RequestRejected};
use crate::state::{SelectionError, Settlement, ViewState};
use crate::view::View;

#[derive(Clone)]
pub struct Session {
    state: Arc<watch::Sender<ViewState>>,
    requester: RecommendationRequester,
}

impl Session {
    /// Mount a session and start loading the genre catalog.
    ///
    /// Must be called from inside a tokio runtime. The catalog request is
    /// issued exactly once here; the returned task only reports how it ended.
    pub fn mount(api: Arc<dyn RecommenderApi>) -> (Self, CatalogTask) {
        let (state, _) = watch::channel(ViewState::default());
        let state = Arc::new(state);

        let task = GenreCatalogLoader::new(api.clone(), &state).spawn();
        let requester = RecommendationRequester::new(api, state.clone());
        info!("Session mounted");

        (Self { state, requester }, task)
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// View model for the current state.
    pub fn view(&self) -> View {
        View::of(&self.state.borrow())
    }

    pub fn select_genre(&self, genre: GenreId) -> Result<(), SelectionError> {
        let mut result = Ok(false);
        self.state.send_if_modified(|view| {
            result = view.select(genre);
            matches!(result, Ok(true))
        });
        result.map(|_| ())
    }

    pub async fn request_recommendation(&self) -> Result<Settlement, RequestRejected> {
        self.requester.request_recommendation().await
    }
}
