//! View models computed from published state snapshots.
//!
//! View models hold display-ready text only. They are derived from a
//! [`SearchState`] or [`DetailState`] and contain no status logic beyond
//! choosing which body to show, so renderers stay trivial.
//!
//! # Example
//!
//! ```rust
//! use cocktaildb::app::SearchState;
//! use cocktaildb::ui::viewmodel::{ListBody, ListViewModel};
//!
//! let vm = ListViewModel::from_state(&SearchState::default());
//! assert!(matches!(vm.body, ListBody::Empty(_)));
//! ```

use crate::app::{DetailState, DetailStatus, SearchState, SearchStatus};
use crate::domain::{CocktailDetail, CocktailSummary};

/// Title above a populated list.
pub const LIST_TITLE: &str = "cocktails";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_MATCH_MESSAGE: &str = "no cocktails matched your search criteria";
pub const SEARCH_ERROR_MESSAGE: &str = "could not reach the cocktail catalog";
pub const IDLE_MESSAGE: &str = "search your favorite cocktail";
pub const NOT_FOUND_MESSAGE: &str = "no cocktail to display";

/// Renderable search list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Term echoed in the search bar.
    pub term: String,
    pub body: ListBody,
}

/// What the list area shows. Loading wins over any results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Items {
        title: String,
        items: Vec<DisplayItem>,
    },
    Empty(EmptyState),
}

/// One row of the search list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub glass: String,
    /// Short description line.
    pub info: String,
    pub image_url: String,
    /// Route that opens this cocktail's detail view.
    pub link: String,
}

/// Message shown in place of a list or detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub is_error: bool,
}

/// Renderable detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    Loading,
    NotFound(EmptyState),
    Found {
        name: String,
        image_url: String,
        fields: Vec<DetailField>,
    },
}

/// Labelled line of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl ListViewModel {
    #[must_use]
    pub fn from_state(state: &SearchState) -> Self {
        let body = match state.status {
            SearchStatus::Loading => ListBody::Loading,
            SearchStatus::Success => ListBody::Items {
                title: LIST_TITLE.to_string(),
                items: state.results.iter().map(DisplayItem::from).collect(),
            },
            SearchStatus::Empty => ListBody::Empty(EmptyState {
                message: NO_MATCH_MESSAGE.to_string(),
                is_error: false,
            }),
            SearchStatus::Error => ListBody::Empty(EmptyState {
                message: SEARCH_ERROR_MESSAGE.to_string(),
                is_error: true,
            }),
            SearchStatus::Idle => ListBody::Empty(EmptyState {
                message: IDLE_MESSAGE.to_string(),
                is_error: false,
            }),
        };

        Self {
            term: state.term.clone(),
            body,
        }
    }
}

impl From<&CocktailSummary> for DisplayItem {
    fn from(summary: &CocktailSummary) -> Self {
        Self {
            name: summary.name.clone(),
            glass: summary.glass_type.clone(),
            info: summary.short_description.clone(),
            image_url: summary.image_url.clone(),
            link: summary.detail_path(),
        }
    }
}

impl DetailViewModel {
    #[must_use]
    pub fn from_state(state: &DetailState) -> Self {
        match (state.status, &state.detail) {
            (DetailStatus::Loading, _) => Self::Loading,
            (DetailStatus::Found, Some(detail)) => Self::found(detail),
            _ => Self::NotFound(EmptyState {
                message: NOT_FOUND_MESSAGE.to_string(),
                is_error: false,
            }),
        }
    }

    fn found(detail: &CocktailDetail) -> Self {
        let fields = vec![
            DetailField {
                label: "name",
                value: detail.name.clone(),
            },
            DetailField {
                label: "category",
                value: detail.category.clone(),
            },
            DetailField {
                label: "info",
                value: detail.alcoholic.clone(),
            },
            DetailField {
                label: "glass",
                value: detail.glass_type.clone(),
            },
            DetailField {
                label: "instructions",
                value: detail.instructions.clone(),
            },
            DetailField {
                label: "ingredients",
                value: detail.ingredients.join(", "),
            },
        ];

        Self::Found {
            name: detail.name.clone(),
            image_url: detail.image_url.clone(),
            fields,
        }
    }
}
