//! # Genre Catalog Loader
//!
//! Fetches the genre list once per session and picks the default selection.
//!
//! The loader only holds a `Weak` handle on the state cell. If the session
//! is dropped while `/generos` is still in flight, the late result is
//! discarded instead of being written into a state nobody owns.

use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use api_client::RecommenderApi;

use crate::state::ViewState;

/// How the one-shot catalog load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog was stored; `count` may be zero
    Loaded { count: usize },
    /// The request failed; the catalog stays empty
    Failed,
    /// The session was gone before the response arrived
    Unmounted,
}

pub struct GenreCatalogLoader {
    api: Arc<dyn RecommenderApi>,
    state: Weak<watch::Sender<ViewState>>,
}

impl GenreCatalogLoader {
    pub(crate) fn new(api: Arc<dyn RecommenderApi>, state: &Arc<watch::Sender<ViewState>>) -> Self {
        Self {
            api,
            state: Arc::downgrade(state),
        }
    }

    /// Run the load on the current runtime without awaiting it.
    pub(crate) fn spawn(self) -> CatalogTask {
        CatalogTask(tokio::spawn(self.load_genres()))
    }

    /// Issue the single `/generos` request and publish the result.
    ///
    /// Failures are logged and never reach the user; the select control
    /// simply stays in its loading state.
    pub async fn load_genres(self) -> LoadOutcome {
        info!("Loading genre catalog");
        let result = self.api.fetch_genres().await;

        let Some(state) = self.state.upgrade() else {
            debug!("Session unmounted before the genre catalog arrived, dropping it");
            return LoadOutcome::Unmounted;
        };

        match result {
            Ok(genres) => {
                let count = genres.len();
                state.send_if_modified(|view| view.apply_catalog(genres));
                info!("Loaded {} genres", count);
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                error!("Could not load the genre list: {}", err);
                LoadOutcome::Failed
            }
        }
    }
}

/// Handle on the background catalog load.
///
/// Dropping it detaches the task; the load still runs to completion.
pub struct CatalogTask(JoinHandle<LoadOutcome>);

impl CatalogTask {
    /// Wait for the load to finish.
    pub async fn finished(self) -> LoadOutcome {
        self.0.await.unwrap_or_else(|err| {
            error!("Genre catalog task did not complete: {}", err);
            LoadOutcome::Failed
        })
    }
}
