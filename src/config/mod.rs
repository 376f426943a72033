use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Largest batch the random-recipes endpoint will return in one call
pub const MAX_BATCH_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub spoonacular: SpoonacularConfig,
    pub cache: CacheConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoonacularConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub batch_size: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub path: PathBuf,
    pub max_recipes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub top_n: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url = std::env::var("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

        let batch_size = std::env::var("SPOONACULAR_BATCH_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid SPOONACULAR_BATCH_SIZE value".to_string()))?;

        let timeout_seconds = std::env::var("HTTP_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid HTTP_TIMEOUT value".to_string()))?;

        let cache_path = std::env::var("CACHE_PATH")
            .unwrap_or_else(|_| "recipeCache.json".to_string())
            .into();

        let max_recipes = std::env::var("CACHE_MAX_RECIPES")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid CACHE_MAX_RECIPES value".to_string()))?;

        let top_n = std::env::var("TOP_N")
            .unwrap_or_else(|_| crate::graph::DEFAULT_TOP_N.to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid TOP_N value".to_string()))?;

        Ok(Settings {
            spoonacular: SpoonacularConfig {
                api_key,
                base_url,
                batch_size,
                timeout_seconds,
                user_agent: format!("Cooking-Helper/{}", env!("CARGO_PKG_VERSION")),
            },
            cache: CacheConfig {
                path: cache_path,
                max_recipes,
            },
            query: QueryConfig { top_n },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.spoonacular.base_url)
            .map_err(|e| Error::Config(format!("Invalid SPOONACULAR_BASE_URL: {e}")))?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(Error::Config(format!(
                "Unsupported protocol '{}' in SPOONACULAR_BASE_URL",
                url.scheme()
            )));
        }

        if self.spoonacular.batch_size == 0 || self.spoonacular.batch_size > MAX_BATCH_SIZE {
            return Err(Error::Config(format!(
                "Batch size must be between 1 and {MAX_BATCH_SIZE}"
            )));
        }

        if self.spoonacular.timeout_seconds == 0 {
            return Err(Error::Config("HTTP timeout must be non-zero".to_string()));
        }

        if self.cache.max_recipes == 0 {
            return Err(Error::Config("Cache capacity must be non-zero".to_string()));
        }

        if self.query.top_n == 0 {
            return Err(Error::Config("TOP_N must be non-zero".to_string()));
        }

        Ok(())
    }

    /// API key, or a configuration error naming the missing variable
    pub fn require_api_key(&self) -> Result<&str> {
        self.spoonacular
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("SPOONACULAR_API_KEY is not set".to_string()))
    }
}
