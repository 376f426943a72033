use super::MostConnected;
use crate::catalog::normalize_ingredient;
use crate::corpus::Corpus;
use std::collections::{HashMap, HashSet};

/// Ingredient adjacency keyed by lowercase raw name instead of id.
///
/// Names are only trimmed and lowercased, not cleaned, so "2 tbsp butter"
/// and "butter" are different entries here even though the catalog merges
/// them. Neighbors come from the other positions of a recipe, so a name
/// listed twice in one recipe counts itself as a neighbor.
#[derive(Debug, Clone, Default)]
pub struct NameAdjacency {
    /// Names in first-encounter order
    order: Vec<String>,
    neighbors: HashMap<String, HashSet<String>>,
}

impl NameAdjacency {
    pub fn build(corpus: &Corpus) -> Self {
        let mut adjacency = Self::default();

        for recipe in corpus.recipes() {
            let names: Vec<String> = recipe
                .ingredients
                .iter()
                .map(|ingredient| normalize_ingredient(&ingredient.name))
                .collect();

            for (i, name) in names.iter().enumerate() {
                if !adjacency.neighbors.contains_key(name) {
                    adjacency.order.push(name.clone());
                }
                let set = adjacency.neighbors.entry(name.clone()).or_default();
                set.extend(
                    names
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, other)| other.clone()),
                );
            }
        }

        adjacency
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct names seen alongside `name`
    pub fn connections(&self, name: &str) -> usize {
        self.neighbors
            .get(&normalize_ingredient(name))
            .map_or(0, HashSet::len)
    }

    /// Name with the largest neighbor set; the earliest encountered wins ties
    pub fn most_connected(&self) -> Option<MostConnected> {
        let mut best: Option<(&String, usize)> = None;
        for name in &self.order {
            let connections = self.neighbors.get(name).map_or(0, HashSet::len);
            if best.map_or(true, |(_, top)| connections > top) {
                best = Some((name, connections));
            }
        }

        best.map(|(name, connections)| MostConnected {
            name: name.clone(),
            connections,
        })
    }
}
