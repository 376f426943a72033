use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Outcome of merging freshly fetched recipes into the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub duplicates: usize,
    pub without_id: usize,
    /// Recipes left out because the cache was full
    pub capped: usize,
}

/// Load cached recipes from a JSON array file.
///
/// A missing file yields an empty cache. A file that is not a JSON array is
/// reported and treated as empty, so the next save replaces it.
pub fn load_cache<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No cache file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    match serde_json::from_str::<Vec<Value>>(&content) {
        Ok(recipes) => {
            info!(
                "Successfully loaded {} recipes from {}",
                recipes.len(),
                path.display()
            );
            Ok(recipes)
        }
        Err(e) => {
            warn!("Error loading cache {}: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

/// Write recipes to the cache file, replacing it atomically
pub fn save_cache<P: AsRef<Path>>(path: P, recipes: &[Value]) -> Result<()> {
    let path = path.as_ref();
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, recipes)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| Error::Io(e.error))?;

    debug!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}

/// Append fetched recipes that are not cached yet, up to `max_recipes` in total.
/// Recipes are identified by their numeric `id` field.
pub fn merge_recipes(
    existing: &mut Vec<Value>,
    fetched: Vec<Value>,
    max_recipes: usize,
) -> MergeReport {
    let mut known: HashSet<i64> = existing.iter().filter_map(recipe_id).collect();
    let mut report = MergeReport::default();
    let total = fetched.len();

    for (index, recipe) in fetched.into_iter().enumerate() {
        if existing.len() >= max_recipes {
            report.capped = total - index;
            info!(
                "Cache holds {} recipes (limit {}), ignoring the rest of the batch",
                existing.len(),
                max_recipes
            );
            break;
        }

        let Some(id) = recipe_id(&recipe) else {
            report.without_id += 1;
            continue;
        };

        if known.insert(id) {
            existing.push(recipe);
            report.added += 1;
        } else {
            debug!("Recipe {} already in cache", id);
            report.duplicates += 1;
        }
    }

    report
}

fn recipe_id(recipe: &Value) -> Option<i64> {
    recipe.get("id").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_cache_is_empty() {
        let dir = TempDir::new().unwrap();
        let recipes = load_cache(dir.path().join("missing.json")).unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_invalid_cache_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_cache(&path).unwrap().is_empty());

        fs::write(&path, r#"{"recipes": []}"#).unwrap();
        assert!(load_cache(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cache.json");
        let recipes = vec![
            json!({"id": 1, "title": "Soup", "extendedIngredients": []}),
            json!({"id": 2, "title": "Salad", "extendedIngredients": []}),
        ];

        save_cache(&path, &recipes).unwrap();
        assert_eq!(load_cache(&path).unwrap(), recipes);
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let mut existing = vec![json!({"id": 1}), json!({"id": 2})];
        let fetched = vec![
            json!({"id": 2}),
            json!({"id": 3}),
            json!({"title": "no id"}),
            json!({"id": 3}),
        ];

        let report = merge_recipes(&mut existing, fetched, 1000);
        assert_eq!(
            report,
            MergeReport {
                added: 1,
                duplicates: 2,
                without_id: 1,
                capped: 0,
            }
        );
        assert_eq!(existing.len(), 3);
        assert_eq!(existing[2], json!({"id": 3}));
    }

    #[test]
    fn test_merge_respects_capacity() {
        let mut existing = vec![json!({"id": 1})];
        let fetched = (2..=6).map(|id| json!({ "id": id })).collect();

        let report = merge_recipes(&mut existing, fetched, 3);
        assert_eq!(report.added, 2);
        assert_eq!(report.capped, 3);
        assert_eq!(existing.len(), 3);
    }
}
