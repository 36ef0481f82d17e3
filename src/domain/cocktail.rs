//! Cocktail domain records.
//!
//! These are the strict, UI-ready records produced by the normalizer. Every
//! field is a plain `String`; absent remote values are already coerced to the
//! empty string, so consumers never see `null` placeholders.

use serde::{Deserialize, Serialize};

/// Route prefix under which a single cocktail's detail view lives.
pub const DETAIL_ROUTE_PREFIX: &str = "/cocktail/";

/// One row of a search result list.
///
/// Built once per remote record and never patched; a successful search always
/// rebuilds the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailSummary {
    /// Remote-assigned identifier (`idDrink`).
    pub id: String,
    pub name: String,
    pub glass_type: String,
    /// Short line shown under the name; the catalog's alcoholic/non-alcoholic label.
    pub short_description: String,
    pub image_url: String,
}

impl CocktailSummary {
    /// Returns the navigation path of this cocktail's detail view.
    ///
    /// # Examples
    ///
    /// ```
    /// use cocktaildb::domain::CocktailSummary;
    ///
    /// let summary = CocktailSummary {
    ///     id: "11000".to_string(),
    ///     name: "Mojito".to_string(),
    ///     glass_type: String::new(),
    ///     short_description: String::new(),
    ///     image_url: String::new(),
    /// };
    /// assert_eq!(summary.detail_path(), "/cocktail/11000");
    /// ```
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("{DETAIL_ROUTE_PREFIX}{}", self.id)
    }
}

/// Full recipe for a single cocktail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailDetail {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub alcoholic: String,
    pub category: String,
    pub glass_type: String,
    pub instructions: String,
    /// Ingredients in their original index order, with empty slots removed.
    pub ingredients: Vec<String>,
}

/// Extracts the identifier from a detail route such as `/cocktail/11000`.
///
/// Returns `None` for any other route or for an empty identifier.
///
/// # Examples
///
/// ```
/// use cocktaildb::domain::cocktail::identifier_from_route;
///
/// assert_eq!(identifier_from_route("/cocktail/123"), Some("123"));
/// assert_eq!(identifier_from_route("/about"), None);
/// assert_eq!(identifier_from_route("/cocktail/"), None);
/// ```
#[must_use]
pub fn identifier_from_route(route: &str) -> Option<&str> {
    route
        .strip_prefix(DETAIL_ROUTE_PREFIX)
        .map(|id| id.trim_end_matches('/'))
        .filter(|id| !id.is_empty())
}
