//! Recipe corpus: the in-memory input consumed by the catalog and the graph.
//!
//! Recipes arrive as raw Spoonacular JSON (from the API or from the cache
//! file). Each one is validated on its own; a recipe whose ingredient list is
//! missing, or which holds an ingredient without an `id` or `name`, is skipped
//! as a whole and counted, so one bad record never aborts a build.

pub mod cache;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// One ingredient occurrence inside a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: i64,
    pub name: String,
}

impl IngredientRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub ingredients: Vec<IngredientRecord>,
}

impl Recipe {
    /// Recipe without source metadata, mostly useful for building corpora in code
    pub fn new(ingredients: Vec<IngredientRecord>) -> Self {
        Self {
            id: None,
            title: None,
            ingredients,
        }
    }
}

/// Loose view of a Spoonacular recipe; every field is optional so that
/// validation can report what is missing instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    id: Option<i64>,
    title: Option<String>,
    #[serde(rename = "extendedIngredients")]
    extended_ingredients: Option<Vec<RawIngredient>>,
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
    id: Option<i64>,
    name: Option<String>,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = Error;

    fn try_from(raw: RawRecipe) -> Result<Self> {
        let label = raw
            .id
            .map(|id| format!("recipe {id}"))
            .unwrap_or_else(|| "recipe without id".to_string());

        let extended = raw.extended_ingredients.ok_or_else(|| {
            Error::MalformedRecipe(format!("{label} has no extendedIngredients"))
        })?;

        let ingredients = extended
            .into_iter()
            .enumerate()
            .map(|(position, ingredient)| match (ingredient.id, ingredient.name) {
                (Some(id), Some(name)) => Ok(IngredientRecord { id, name }),
                (None, _) => Err(Error::MalformedRecipe(format!(
                    "{label}: ingredient #{} has no id",
                    position + 1
                ))),
                (_, None) => Err(Error::MalformedRecipe(format!(
                    "{label}: ingredient #{} has no name",
                    position + 1
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Recipe {
            id: raw.id,
            title: raw.title,
            ingredients,
        })
    }
}

/// Parse a single raw recipe value
pub fn parse_recipe(value: &Value) -> Result<Recipe> {
    let raw = RawRecipe::deserialize(value)?;
    Recipe::try_from(raw)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    recipes: Vec<Recipe>,
    skipped: usize,
}

impl Corpus {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            skipped: 0,
        }
    }

    /// Build a corpus from raw recipe JSON, skipping malformed recipes
    pub fn from_values(values: &[Value]) -> Self {
        let mut recipes = Vec::with_capacity(values.len());
        let mut skipped = 0;

        for (index, value) in values.iter().enumerate() {
            match parse_recipe(value) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping recipe #{}: {}", index + 1, e.log_safe());
                }
            }
        }

        debug!(
            "Corpus ready: {} recipes ({} skipped)",
            recipes.len(),
            skipped
        );

        Self { recipes, skipped }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of malformed recipes dropped while building the corpus
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for Corpus {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_spoonacular_recipe() {
        let value = json!({
            "id": 716429,
            "title": "Pasta with Garlic",
            "extendedIngredients": [
                {"id": 1001, "name": "butter", "aisle": "Milk, Eggs, Other Dairy", "amount": 1.0},
                {"id": 11215, "name": "garlic", "unit": "cloves"}
            ]
        });

        let recipe = parse_recipe(&value).unwrap();
        assert_eq!(recipe.id, Some(716429));
        assert_eq!(recipe.title.as_deref(), Some("Pasta with Garlic"));
        assert_eq!(
            recipe.ingredients,
            vec![
                IngredientRecord::new(1001, "butter"),
                IngredientRecord::new(11215, "garlic"),
            ]
        );
    }

    #[test]
    fn test_malformed_recipes_are_skipped() {
        let values = vec![
            json!({"id": 1, "extendedIngredients": [{"id": 10, "name": "salt"}]}),
            json!({"id": 2, "title": "No ingredients"}),
            json!({"id": 3, "extendedIngredients": [{"id": 11, "name": "flour"}, {"name": "water"}]}),
            json!({"id": 4, "extendedIngredients": [{"id": 12}]}),
            json!("not an object"),
            json!({"id": 5, "extendedIngredients": []}),
        ];

        let corpus = Corpus::from_values(&values);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.skipped(), 4);
        assert_eq!(corpus.recipes()[0].id, Some(1));
        assert_eq!(corpus.recipes()[1].id, Some(5));
    }

    #[test]
    fn test_malformed_error_names_the_problem() {
        let err = parse_recipe(&json!({"id": 7, "extendedIngredients": [{"id": 1}]})).unwrap_err();
        match err {
            Error::MalformedRecipe(msg) => assert_eq!(msg, "recipe 7: ingredient #1 has no name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
