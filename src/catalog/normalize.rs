//! Conversion of raw catalog payloads into domain records.
//!
//! Pure functions, no I/O. Every field is pulled by its fixed catalog key and
//! coerced to a string, so `null` and absent values surface as `""`. The
//! indexed `strIngredient1..N` group is collapsed here into an ordered list and
//! nothing downstream ever sees the indexed form.

use crate::catalog::payload::{type_name, RawPayload, RawRecord};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{CocktailDetail, CocktailSummary};
use serde_json::Value;

/// Highest ingredient index the catalog populates.
pub const MAX_INGREDIENTS: usize = 15;

const ID: &str = "idDrink";
const NAME: &str = "strDrink";
const THUMB: &str = "strDrinkThumb";
const GLASS: &str = "strGlass";
const ALCOHOLIC: &str = "strAlcoholic";
const CATEGORY: &str = "strCategory";
const INSTRUCTIONS: &str = "strInstructions";
const INGREDIENT_PREFIX: &str = "strIngredient";

/// Maps a search payload to summaries.
///
/// `drinks: null` (or a missing key) yields an empty list.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedPayload`] if the payload shape is not the
/// documented one, including a record that is not a JSON object.
///
/// # Examples
///
/// ```
/// use cocktaildb::catalog::{normalize::to_summaries, RawPayload};
/// use serde_json::json;
///
/// let raw = RawPayload(json!({ "drinks": null }));
/// assert!(to_summaries(&raw)?.is_empty());
/// # Ok::<(), cocktaildb::CatalogError>(())
/// ```
pub fn to_summaries(raw: &RawPayload) -> Result<Vec<CocktailSummary>> {
    let Some(records) = raw.drinks()? else {
        return Ok(Vec::new());
    };

    records
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let record = value.as_object().ok_or_else(|| {
                CatalogError::MalformedPayload(format!(
                    "drinks[{index}] should be an object, got {}",
                    type_name(value)
                ))
            })?;
            Ok(summary_from(record))
        })
        .collect()
}

/// Maps a lookup payload to the detail of its first record.
///
/// Returns `None` when there is nothing usable: `drinks` null, empty, absent,
/// or malformed.
#[must_use]
pub fn to_detail(raw: &RawPayload) -> Option<CocktailDetail> {
    let records = match raw.drinks() {
        Ok(records) => records?,
        Err(e) => {
            tracing::debug!(error = %e, "lookup payload unusable");
            return None;
        }
    };

    records.first()?.as_object().map(detail_from)
}

fn summary_from(record: &RawRecord) -> CocktailSummary {
    CocktailSummary {
        id: text(record, ID),
        name: text(record, NAME),
        glass_type: text(record, GLASS),
        short_description: text(record, ALCOHOLIC),
        image_url: text(record, THUMB),
    }
}

fn detail_from(record: &RawRecord) -> CocktailDetail {
    CocktailDetail {
        id: text(record, ID),
        name: text(record, NAME),
        image_url: text(record, THUMB),
        alcoholic: text(record, ALCOHOLIC),
        category: text(record, CATEGORY),
        glass_type: text(record, GLASS),
        instructions: text(record, INSTRUCTIONS),
        ingredients: ingredients(record),
    }
}

/// Scans `strIngredient1..=MAX_INGREDIENTS` in order, keeping non-blank values.
fn ingredients(record: &RawRecord) -> Vec<String> {
    (1..=MAX_INGREDIENTS)
        .filter_map(|index| record.get(&format!("{INGREDIENT_PREFIX}{index}")))
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(String::from)
        .collect()
}

/// Reads a scalar field as text; `null`, absent and composite values become `""`.
fn text(record: &RawRecord, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
