//! Ingredient catalog: a deduplicated id -> display-name directory used to
//! resolve free-text ingredient queries.
//!
//! Deduplication is lossy on purpose. Two records whose names clean to the
//! same key (see [`clean::clean_ingredient_name`]) keep only the first id
//! seen; the dropped id is not merged anywhere and can still show up as a
//! graph node, where it is labelled "Unknown".

pub mod clean;

use crate::corpus::Corpus;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::info;

pub use clean::{clean_ingredient_name, normalize_ingredient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    /// Original, uncleaned ingredient name
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Sorted by name (case-insensitive), then id
    entries: Vec<CatalogEntry>,
    positions: HashMap<i64, usize>,
}

impl Catalog {
    /// Build the catalog from every ingredient record in the corpus
    pub fn build(corpus: &Corpus) -> Self {
        let mut seen_keys = HashSet::new();
        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut positions: HashMap<i64, usize> = HashMap::new();

        for recipe in corpus.recipes() {
            for ingredient in &recipe.ingredients {
                let key = clean_ingredient_name(&ingredient.name);
                if !seen_keys.insert(key) {
                    continue;
                }

                // An id that comes back under a new cleaned name takes that name
                match positions.get(&ingredient.id) {
                    Some(&position) => entries[position].name = ingredient.name.clone(),
                    None => {
                        positions.insert(ingredient.id, entries.len());
                        entries.push(CatalogEntry {
                            id: ingredient.id,
                            name: ingredient.name.clone(),
                        });
                    }
                }
            }
        }

        entries.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.id));
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id, position))
            .collect();

        let catalog = Self { entries, positions };
        info!(
            "Built ingredient catalog with {} unique items",
            catalog.len()
        );
        catalog
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CatalogEntry> {
        self.positions.get(&id).map(|&position| &self.entries[position])
    }

    /// Display name for an id, if the id survived deduplication
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.get(id).map(|entry| entry.name.as_str())
    }

    /// All entries whose name contains `partial`, ignoring case, in catalog order
    pub fn lookup(&self, partial: &str) -> Vec<&CatalogEntry> {
        let needle = partial.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a free-text query to a single entry when possible
    pub fn resolve(&self, partial: &str) -> Resolution<'_> {
        let mut matches = self.lookup(partial);
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }
}

/// Result of resolving an ingredient query against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    NotFound,
    Unique(&'a CatalogEntry),
    /// Several candidates; the caller picks one by its 1-based position
    Ambiguous(Vec<&'a CatalogEntry>),
}

impl<'a> Resolution<'a> {
    pub fn candidates(&self) -> Vec<&'a CatalogEntry> {
        match self {
            Resolution::NotFound => Vec::new(),
            Resolution::Unique(entry) => vec![*entry],
            Resolution::Ambiguous(candidates) => candidates.clone(),
        }
    }

    /// Pick a candidate by its 1-based position in the candidate list
    pub fn select(&self, choice: usize) -> Option<&'a CatalogEntry> {
        match self {
            Resolution::NotFound => None,
            Resolution::Unique(entry) => (choice == 1).then_some(*entry),
            Resolution::Ambiguous(candidates) => choice
                .checked_sub(1)
                .and_then(|index| candidates.get(index))
                .copied(),
        }
    }
}
