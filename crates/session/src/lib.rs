//! Session crate for the ReelPicker client.
//!
//! This crate contains the client-side workflow: the one-shot genre catalog
//! load, the genre selection, and the recommendation request state machine,
//! all sharing one observable [`ViewState`].

pub mod catalog;
pub mod requester;
pub mod session;
pub mod state;
pub mod view;

pub use catalog::{CatalogTask, GenreCatalogLoader, LoadOutcome};
pub use requester::{RecommendationRequester, RequestRejected};
pub use session::Session;
pub use state::{
    BACKEND_UNAVAILABLE_NOTICE, RecommendationFailure, RequestState, SelectionError, Settlement,
    ViewState,
};
pub use view::{ResultView, SelectView, TriggerView, View};
