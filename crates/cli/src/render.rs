//! Terminal rendering of the session view model.

use colored::Colorize;

use model::{Field, MoviePage};
use session::{ResultView, SelectView, TriggerView, View};

/// Full screen: select control, button and result area.
pub fn view(view: &View) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Movie Finder".bold().blue()));
    out.push_str(&select(&view.select));
    out.push_str(&trigger(&view.trigger));
    out.push_str(&result(&view.result));
    out
}

pub fn select(select: &SelectView) -> String {
    let mut out = format!("{}\n", "Preferred genre".bold());
    if let Some(placeholder) = select.placeholder {
        out.push_str(&format!("  {} {}\n", "[disabled]".dimmed(), placeholder.dimmed()));
        return out;
    }
    for option in &select.options {
        if select.selected.as_ref() == Some(option) {
            out.push_str(&format!("  {} {}\n", "●".green(), option.to_string().green()));
        } else {
            out.push_str(&format!("  ○ {}\n", option));
        }
    }
    out
}

pub fn trigger(trigger: &TriggerView) -> String {
    if trigger.disabled {
        format!("[ {} ]\n", trigger.label.dimmed())
    } else {
        format!("[ {} ]\n", trigger.label.bold())
    }
}

pub fn result(result: &ResultView) -> String {
    match result {
        ResultView::Hint(hint) => format!("{}\n", hint),
        ResultView::Pending => format!("{}\n", "…".dimmed()),
        ResultView::Movie {
            headline,
            director,
            genres,
        } => {
            let mut out = format!("{}\n", "✨ Recommended for you ✨".bold().green());
            out.push_str(&format!("{}Movie: {}\n", "• ".green(), headline));
            out.push_str(&format!(
                "{}Director: {}\n",
                "• ".green(),
                director.as_deref().unwrap_or("unknown")
            ));
            out.push_str(&format!("{}Genres: {}\n", "• ".green(), genres));
            out
        }
        ResultView::Notice(notice) => format!("{} {}\n", "✗".red(), notice.red()),
    }
}

/// One page of the movie listing.
pub fn movie_page(page: &MoviePage) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "Page {} of {} ({} movies)",
            page.current_page, page.pages, page.total_items
        )
        .bold()
        .blue()
    );
    for movie in &page.items {
        out.push_str(&format!(
            "{}: {} [{}]\n",
            movie.id.to_string().green(),
            movie.headline(),
            movie.genre_list().join(", ")
        ));
        if let Some(director) = &movie.director {
            out.push_str(&format!("   Director: {}\n", director));
        }
        if let Field::Present(cast) = &movie.cast {
            out.push_str(&format!("   Cast: {}\n", cast));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{GenreId, Movie};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_select_placeholder() {
        plain();
        let view = SelectView {
            disabled: true,
            placeholder: Some("Loading genres..."),
            options: Vec::new(),
            selected: None,
        };
        assert_eq!(select(&view), "Preferred genre\n  [disabled] Loading genres...\n");
    }

    #[test]
    fn test_select_marks_current_genre() {
        plain();
        let view = SelectView {
            disabled: false,
            placeholder: None,
            options: vec![GenreId::new("Action"), GenreId::new("Comedy")],
            selected: Some(GenreId::new("Action")),
        };
        assert_eq!(select(&view), "Preferred genre\n  ● Action\n  ○ Comedy\n");
    }

    #[test]
    fn test_movie_result() {
        plain();
        let text = result(&ResultView::Movie {
            headline: "Mad Max (1979)".to_string(),
            director: Some("George Miller".to_string()),
            genres: "Action".to_string(),
        });
        assert!(text.contains("Movie: Mad Max (1979)"));
        assert!(text.contains("Director: George Miller"));
    }

    #[test]
    fn test_movie_page_lists_cast_only_when_present() {
        plain();
        let page = MoviePage {
            items: vec![Movie {
                id: 7,
                title: "Mad Max".to_string(),
                genres: "Action, Sci-Fi".to_string(),
                director: None,
                cast: Field::Present("Mel Gibson".to_string()),
                year: Some(1979),
                active: true,
            }],
            total_items: 1,
            pages: 1,
            current_page: 1,
        };
        let text = movie_page(&page);
        assert!(text.starts_with("Page 1 of 1 (1 movies)\n"));
        assert!(text.contains("7: Mad Max (1979) [Action, Sci-Fi]"));
        assert!(text.contains("Cast: Mel Gibson"));
        assert!(!text.contains("Director"));
    }
}
