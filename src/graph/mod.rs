//! Co-occurrence graph over ingredient ids.
//!
//! Every distinct ingredient id in the corpus becomes a node; two ids that
//! appear in the same recipe share an undirected edge whose weight counts the
//! recipes they appear in together. The graph is rebuilt from the corpus on
//! every run and is read-only afterwards.

pub mod connectivity;

use crate::catalog::Catalog;
use crate::corpus::{Corpus, IngredientRecord};
use connectivity::NameAdjacency;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::info;

/// Number of pairings returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 5;

/// Label for neighbors whose id was dropped by catalog deduplication
pub const UNKNOWN_INGREDIENT: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientNode {
    pub id: i64,
    /// Name of the first occurrence of this id
    pub name: String,
}

/// One recommended pairing for an ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id: i64,
    pub name: String,
    /// Number of recipes containing both ingredients
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostConnected {
    pub name: String,
    pub connections: usize,
}

#[derive(Debug, Clone)]
pub struct CooccurrenceGraph {
    graph: UnGraph<IngredientNode, u32>,
    node_index: HashMap<i64, NodeIndex>,
    names: NameAdjacency,
}

impl CooccurrenceGraph {
    pub fn build(corpus: &Corpus) -> Self {
        let mut this = Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
            names: NameAdjacency::build(corpus),
        };

        for recipe in corpus.recipes() {
            // Distinct ids only: a repeated id neither links to itself nor
            // counts the same recipe twice for one pair.
            let mut members: Vec<NodeIndex> = Vec::with_capacity(recipe.ingredients.len());
            for ingredient in &recipe.ingredients {
                let idx = this.ensure_node(ingredient);
                if !members.contains(&idx) {
                    members.push(idx);
                }
            }

            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    this.bump_edge(a, b);
                }
            }
        }

        info!(
            "Built co-occurrence graph: {} ingredients, {} pairings",
            this.node_count(),
            this.edge_count()
        );
        this
    }

    fn ensure_node(&mut self, ingredient: &IngredientRecord) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&ingredient.id) {
            return idx;
        }

        let idx = self.graph.add_node(IngredientNode {
            id: ingredient.id,
            name: ingredient.name.clone(),
        });
        self.node_index.insert(ingredient.id, idx);
        idx
    }

    fn bump_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(a, b, 1);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node(&self, id: i64) -> Option<&IngredientNode> {
        self.node_index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Co-occurrence count for a pair, `None` when they never share a recipe
    pub fn weight(&self, a: i64, b: i64) -> Option<u32> {
        let a = *self.node_index.get(&a)?;
        let b = *self.node_index.get(&b)?;
        let edge = self.graph.find_edge(a, b)?;
        Some(self.graph[edge])
    }

    /// Neighbor ids with edge weights, in the graph's enumeration order
    pub fn neighbors(&self, id: i64) -> Vec<(i64, u32)> {
        let Some(&idx) = self.node_index.get(&id) else {
            return Vec::new();
        };

        self.graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other].id, *edge.weight())
            })
            .collect()
    }

    /// All edges as `(id, id, weight)`, each pair listed once
    pub fn edges(&self) -> impl Iterator<Item = (i64, i64, u32)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                *edge.weight(),
            )
        })
    }

    /// Ingredients most often cooked with `id`, strongest first.
    ///
    /// Equal weights are ordered by ascending ingredient id. Names come from
    /// the catalog; ids the catalog dropped are labelled [`UNKNOWN_INGREDIENT`].
    /// An unknown id or an isolated node yields an empty list.
    pub fn recommend_pairings(&self, id: i64, top_n: usize, catalog: &Catalog) -> Vec<Pairing> {
        let mut neighbors = self.neighbors(id);
        neighbors.sort_by_key(|&(neighbor, weight)| (Reverse(weight), neighbor));

        neighbors
            .into_iter()
            .take(top_n)
            .map(|(neighbor, weight)| Pairing {
                id: neighbor,
                name: catalog
                    .name_of(neighbor)
                    .unwrap_or(UNKNOWN_INGREDIENT)
                    .to_string(),
                weight,
            })
            .collect()
    }

    /// Ingredient with the most distinct co-occurring ingredients, keyed by
    /// lowercase raw name rather than id. `None` for an empty corpus.
    pub fn most_connected(&self) -> Option<MostConnected> {
        self.names.most_connected()
    }

    /// Same question answered on the id-keyed graph. Can disagree with
    /// [`most_connected`](Self::most_connected) when one name maps to several
    /// ids or one id to several names.
    pub fn most_connected_by_id(&self) -> Option<MostConnected> {
        let mut best: Option<(NodeIndex, usize)> = None;
        for idx in self.graph.node_indices() {
            let degree = self.graph.neighbors(idx).count();
            if best.map_or(true, |(_, top)| degree > top) {
                best = Some((idx, degree));
            }
        }

        best.map(|(idx, connections)| MostConnected {
            name: self.graph[idx].name.clone(),
            connections,
        })
    }
}
