//! View model derived from [`ViewState`].
//!
//! Renderers draw these structs and never inspect the state directly, so
//! every front-end shows the same enable/disable rules and texts.

use model::GenreId;

use crate::state::{RequestState, ViewState};

pub const LOADING_GENRES_PLACEHOLDER: &str = "Loading genres...";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const IDLE_HINT: &str = "Press the button to get a recommendation.";

/// The genre select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub disabled: bool,
    /// Shown instead of options while the catalog is empty
    pub placeholder: Option<&'static str>,
    pub options: Vec<GenreId>,
    pub selected: Option<GenreId>,
}

/// The "recommend" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub disabled: bool,
    pub busy: bool,
    pub label: String,
}

/// The area under the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Hint(&'static str),
    Pending,
    Movie {
        headline: String,
        director: Option<String>,
        genres: String,
    },
    Notice(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub select: SelectView,
    pub trigger: TriggerView,
    pub result: ResultView,
}

impl View {
    pub fn of(state: &ViewState) -> Self {
        Self {
            select: select_view(state),
            trigger: trigger_view(state),
            result: result_view(&state.request),
        }
    }
}

fn select_view(state: &ViewState) -> SelectView {
    let empty = state.catalog.is_empty();
    SelectView {
        disabled: empty,
        placeholder: empty.then_some(LOADING_GENRES_PLACEHOLDER),
        options: state.catalog.as_slice().to_vec(),
        selected: state.selected.clone(),
    }
}

fn trigger_view(state: &ViewState) -> TriggerView {
    let loading = state.request.is_loading();
    let label = match (&state.selected, loading) {
        (_, true) => SEARCHING_LABEL.to_string(),
        (Some(genre), false) => format!("Recommend {}", genre),
        (None, false) => "Recommend".to_string(),
    };
    TriggerView {
        disabled: loading,
        busy: loading,
        label,
    }
}

fn result_view(request: &RequestState) -> ResultView {
    match request {
        RequestState::Idle => ResultView::Hint(IDLE_HINT),
        RequestState::Loading => ResultView::Pending,
        RequestState::Settled(Ok(movie)) => ResultView::Movie {
            headline: movie.headline(),
            director: movie.director.clone(),
            genres: movie.genres.clone(),
        },
        RequestState::Settled(Err(failure)) => ResultView::Notice(failure.notice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BACKEND_UNAVAILABLE_NOTICE, RecommendationFailure};
    use model::{Field, Movie};

    #[test]
    fn test_empty_catalog_disables_select() {
        let view = View::of(&ViewState::default());

        assert!(view.select.disabled);
        assert_eq!(view.select.placeholder, Some(LOADING_GENRES_PLACEHOLDER));
        assert!(view.select.options.is_empty());
        assert_eq!(view.trigger.label, "Recommend");
        assert!(!view.trigger.disabled);
        assert_eq!(view.result, ResultView::Hint(IDLE_HINT));
    }

    #[test]
    fn test_loading_disables_trigger() {
        let state = ViewState {
            selected: Some(GenreId::new("Action")),
            request: RequestState::Loading,
            ..ViewState::default()
        };
        let view = View::of(&state);

        assert!(view.trigger.disabled);
        assert!(view.trigger.busy);
        assert_eq!(view.trigger.label, SEARCHING_LABEL);
        assert_eq!(view.result, ResultView::Pending);
    }

    #[test]
    fn test_settled_movie() {
        let movie = Movie {
            id: 7,
            title: "Mad Max".to_string(),
            genres: "Action".to_string(),
            director: Some("George Miller".to_string()),
            cast: Field::Null,
            year: Some(1979),
            active: true,
        };
        let state = ViewState {
            selected: Some(GenreId::new("Action")),
            request: RequestState::Settled(Ok(movie)),
            ..ViewState::default()
        };
        let view = View::of(&state);

        assert_eq!(view.trigger.label, "Recommend Action");
        assert_eq!(
            view.result,
            ResultView::Movie {
                headline: "Mad Max (1979)".to_string(),
                director: Some("George Miller".to_string()),
                genres: "Action".to_string(),
            }
        );
    }

    #[test]
    fn test_settled_failure_shows_notice_and_enables_trigger() {
        let state = ViewState {
            selected: Some(GenreId::new("Action")),
            request: RequestState::Settled(Err(RecommendationFailure::Backend("boom".into()))),
            ..ViewState::default()
        };
        let view = View::of(&state);

        assert!(!view.trigger.disabled);
        assert_eq!(view.result, ResultView::Notice(BACKEND_UNAVAILABLE_NOTICE));
    }
}
