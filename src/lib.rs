pub mod config;
pub mod error;

// Recipe input and on-disk cache
pub mod corpus;

// Core: ingredient catalog and co-occurrence graph
pub mod catalog;
pub mod graph;
pub mod index;

// Spoonacular integration
pub mod spoonacular;

// Command-line interface
pub mod cli;

// Re-exports
pub use catalog::{Catalog, CatalogEntry, Resolution};
pub use config::Settings;
pub use corpus::{Corpus, IngredientRecord, Recipe};
pub use error::{Error, Result};
pub use graph::{CooccurrenceGraph, MostConnected, Pairing, DEFAULT_TOP_N};
pub use index::RecipeIndex;
