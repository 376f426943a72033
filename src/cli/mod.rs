pub mod commands;
pub mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cooking-helper")]
#[command(about = "Cooking Helper - ingredient pairings from a recipe corpus", long_about = None)]
pub struct Cli {
    /// Recipe cache file
    #[arg(long, global = true, env = "CACHE_PATH")]
    pub cache: Option<PathBuf>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a batch of random recipes and add them to the cache
    Fetch,

    /// Recommend ingredients that pair well with an ingredient
    Pairings {
        /// Ingredient name or part of it
        ingredient: String,

        /// Number of pairings to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Candidate number to use when the name is ambiguous
        #[arg(short, long)]
        choice: Option<usize>,
    },

    /// Show the ingredient with the most distinct co-occurring ingredients
    MostConnected {
        /// Count by ingredient id instead of by name
        #[arg(long)]
        by_id: bool,
    },

    /// List catalog ingredients matching a partial name
    Lookup {
        /// Partial ingredient name
        partial: String,
    },

    /// Look up substitutes for an ingredient
    Substitutes {
        /// Ingredient name
        ingredient: String,
    },

    /// Show aisle and estimated price for an ingredient
    Info {
        /// Ingredient name or part of it
        ingredient: String,

        /// Candidate number to use when the name is ambiguous
        #[arg(short, long)]
        choice: Option<usize>,
    },

    /// Menu-driven session
    Interactive,
}
