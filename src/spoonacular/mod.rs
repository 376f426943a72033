pub mod client;
pub mod models;

pub use client::SpoonacularClient;
pub use models::{IngredientInformation, Substitutes};
