//! # Meal Records
//!
//! A [`Meal`] is one recipe record returned by TheMealDB. The service sends
//! each record as a flat JSON object of string fields (`idMeal`, `strMeal`,
//! `strIngredient1`, `strMeasure1`, ...), so the record is kept as a map of
//! field name to value and exposed through typed accessors.
//!
//! ## Ingredients
//!
//! Ingredients and measures are stored as numbered sibling fields:
//!
//! ```text
//! strIngredient1 = "Flour"    strMeasure1 = "200g"
//! strIngredient2 = "Eggs"     strMeasure2 = "2"
//! ...
//! strIngredient20 = ""        strMeasure20 = ""
//! ```
//!
//! [`Meal::ingredients`] walks the slots `1..=MAX_INGREDIENT_SLOTS` and pairs
//! each non-blank ingredient with the measure in the same slot.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Highest ingredient/measure slot index the service populates.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One recipe record as returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Meal {
    fields: BTreeMap<String, String>,
}

impl From<Map<String, Value>> for Meal {
    fn from(map: Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Meal
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Meal {
    /// Raw access to any field. Absent and `null` fields return `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("idMeal")
    }

    /// Display name, or an empty string when the service omitted it.
    pub fn name(&self) -> &str {
        self.field("strMeal").unwrap_or_default()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.non_blank("strMealThumb")
    }

    pub fn instructions(&self) -> &str {
        self.field("strInstructions").unwrap_or_default()
    }

    pub fn category(&self) -> Option<&str> {
        self.non_blank("strCategory")
    }

    pub fn area(&self) -> Option<&str> {
        self.non_blank("strArea")
    }

    pub fn source(&self) -> Option<&str> {
        self.non_blank("strSource")
    }

    pub fn youtube(&self) -> Option<&str> {
        self.non_blank("strYoutube")
    }

    /// Tags are sent as a single comma separated string (`"Pasta,Curry"`).
    pub fn tags(&self) -> Vec<&str> {
        self.field("strTags")
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Derive the ingredient list from the numbered ingredient/measure slots.
    ///
    /// Slots whose ingredient is absent or the empty string are skipped no
    /// matter what their measure holds. Any other value, even a lone space,
    /// makes a line. The measure is kept as sent, and is empty
    /// when the slot has no measure field.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self
                    .field(&format!("strIngredient{slot}"))
                    .filter(|v| !v.is_empty())?;
                let measure = self
                    .field(&format!("strMeasure{slot}"))
                    .unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    fn non_blank(&self, name: &str) -> Option<&str> {
        self.field(name).filter(|v| !v.trim().is_empty())
    }
}

/// One line of a meal's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.measure)
    }
}
