//! Text renderers for the terminal front end.
//!
//! Each renderer turns a state snapshot into a complete frame as a `String`.
//! The caller decides where it goes; the binary prints it, tests inspect it.
//!
//! ```text
//! SearchState → ListViewModel   → render_search → String
//! DetailState → DetailViewModel → render_detail → String
//! ```

use crate::app::{DetailState, SearchState};
use crate::ui::theme::{Style, Theme};
use crate::ui::viewmodel::{
    DetailViewModel, EmptyState, ListBody, ListViewModel, LOADING_MESSAGE,
};
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// Renders the search bar and result list.
///
/// # Example
///
/// ```rust
/// use cocktaildb::app::{SearchState, SearchStatus};
/// use cocktaildb::ui::{render_search, Theme};
///
/// let state = SearchState { term: "zzz".into(), status: SearchStatus::Empty, results: vec![] };
/// let frame = render_search(&state, &Theme::plain());
/// assert!(frame.contains("no cocktails matched your search criteria"));
/// ```
#[must_use]
pub fn render_search(state: &SearchState, theme: &Theme) -> String {
    render_list(&ListViewModel::from_state(state), theme)
}

/// Renders the detail view for one cocktail.
#[must_use]
pub fn render_detail(state: &DetailState, theme: &Theme) -> String {
    render_detail_viewmodel(&DetailViewModel::from_state(state), theme)
}

fn render_list(vm: &ListViewModel, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", theme.paint(Style::Label, "search:"), vm.term);
    let _ = writeln!(out, "{}", rule(theme));

    match &vm.body {
        ListBody::Loading => {
            let _ = writeln!(out, "{}", theme.paint(Style::Status, LOADING_MESSAGE));
        }
        ListBody::Empty(empty) => render_empty_state(&mut out, empty, theme),
        ListBody::Items { title, items } => {
            let _ = writeln!(out, "{}", theme.paint(Style::Title, title));
            for item in items {
                let _ = writeln!(out, "{}", theme.paint(Style::Normal, &item.name));
                let _ = writeln!(out, "  {}", theme.paint(Style::Dim, &item.glass));
                let _ = writeln!(out, "  {}", theme.paint(Style::Dim, &item.info));
                let _ = writeln!(out, "  {}", theme.paint(Style::Label, &item.link));
            }
        }
    }

    out
}

fn render_detail_viewmodel(vm: &DetailViewModel, theme: &Theme) -> String {
    let mut out = String::new();

    match vm {
        DetailViewModel::Loading => {
            let _ = writeln!(out, "{}", theme.paint(Style::Status, LOADING_MESSAGE));
        }
        DetailViewModel::NotFound(empty) => render_empty_state(&mut out, empty, theme),
        DetailViewModel::Found {
            name,
            image_url,
            fields,
        } => {
            let _ = writeln!(out, "{}", theme.paint(Style::Title, name));
            let _ = writeln!(out, "{}", rule(theme));
            if !image_url.is_empty() {
                let _ = writeln!(out, "{}", theme.paint(Style::Dim, image_url));
            }
            for field in fields {
                let label = format!("{} :", field.label);
                let _ = writeln!(out, "{} {}", theme.paint(Style::Label, &label), field.value);
            }
        }
    }

    out
}

fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme) {
    let style = if empty.is_error { Style::Error } else { Style::Status };
    let _ = writeln!(out, "{}", theme.paint(style, &empty.message));
}

fn rule(theme: &Theme) -> String {
    theme.paint(Style::Border, &"─".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DetailStatus, SearchStatus};
    use crate::catalog::{to_detail, RawPayload};
    use crate::domain::CocktailSummary;
    use serde_json::json;

    #[test]
    fn list_frame_shows_term_title_and_rows() {
        let state = SearchState {
            term: "mar".to_string(),
            status: SearchStatus::Success,
            results: vec![CocktailSummary {
                id: "11007".to_string(),
                name: "Margarita".to_string(),
                glass_type: "Cocktail glass".to_string(),
                short_description: "Alcoholic".to_string(),
                image_url: String::new(),
            }],
        };

        let frame = render_search(&state, &Theme::plain());
        assert!(frame.starts_with("search: mar\n"));
        assert!(frame.contains("cocktails\nMargarita\n  Cocktail glass\n  Alcoholic\n  /cocktail/11007\n"));
    }

    #[test]
    fn loading_frame_hides_the_title() {
        let state = SearchState {
            term: "mar".to_string(),
            status: SearchStatus::Loading,
            results: vec![],
        };
        let frame = render_search(&state, &Theme::plain());
        assert!(frame.contains(LOADING_MESSAGE));
        assert!(!frame.contains("cocktails"));
    }

    #[test]
    fn partial_ingredients_render_without_null_placeholders() {
        let raw = RawPayload(json!({
            "drinks": [{
                "idDrink": "1",
                "strDrink": "Daiquiri",
                "strAlcoholic": "Alcoholic",
                "strCategory": null,
                "strGlass": "Cocktail glass",
                "strInstructions": null,
                "strIngredient1": "Rum",
                "strIngredient2": "Lime",
                "strIngredient3": null,
                "strIngredient4": ""
            }]
        }));
        let state = DetailState {
            identifier: "1".to_string(),
            status: DetailStatus::Found,
            detail: to_detail(&raw),
        };

        let frame = render_detail(&state, &Theme::plain());
        assert!(frame.contains("ingredients : Rum, Lime\n"));
        assert!(frame.contains("category : \n"));
        assert!(!frame.contains("null"));
        assert!(!frame.contains("undefined"));
    }

    #[test]
    fn not_found_frame() {
        let frame = render_detail(&DetailState::default(), &Theme::default());
        assert!(frame.contains("no cocktail to display"));
    }
}
