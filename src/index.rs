use crate::catalog::Catalog;
use crate::corpus::{cache, Corpus};
use crate::error::Result;
use crate::graph::CooccurrenceGraph;
use std::path::Path;
use tracing::info;

/// Catalog and graph built from one corpus, ready to answer queries
#[derive(Debug, Clone)]
pub struct RecipeIndex {
    pub corpus: Corpus,
    pub catalog: Catalog,
    pub graph: CooccurrenceGraph,
}

impl RecipeIndex {
    pub fn build(corpus: Corpus) -> Self {
        let catalog = Catalog::build(&corpus);
        let graph = CooccurrenceGraph::build(&corpus);
        Self {
            corpus,
            catalog,
            graph,
        }
    }

    /// Build from the recipe cache file; a missing cache gives an empty index
    pub fn load<P: AsRef<Path>>(cache_path: P) -> Result<Self> {
        let values = cache::load_cache(cache_path)?;
        let corpus = Corpus::from_values(&values);
        if corpus.skipped() > 0 {
            info!("{} malformed recipes were left out", corpus.skipped());
        }
        Ok(Self::build(corpus))
    }
}
