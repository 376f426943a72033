use crate::config::SpoonacularConfig;
use crate::spoonacular::models::{IngredientInformation, RandomRecipes, Substitutes, SubstitutesResponse};
use crate::{Error, Result};
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};

/// Spoonacular API client
#[derive(Clone)]
pub struct SpoonacularClient {
    client: Client,
    config: SpoonacularConfig,
    max_retries: u32,
    initial_backoff: Duration,
}

impl SpoonacularClient {
    /// Create a new client; requires an API key
    pub fn new(config: SpoonacularConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("SPOONACULAR_API_KEY is not set".to_string()))?;

        // Header rather than query parameter keeps the key out of request URLs
        let mut headers = header::HeaderMap::new();
        let mut key_value = header::HeaderValue::from_str(api_key)
            .map_err(|e| Error::Config(format!("Invalid Spoonacular API key: {e}")))?;
        key_value.set_sensitive(true);
        headers.insert("x-api-key", key_value);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
        })
    }

    /// Make a GET request, retrying transient network failures with exponential backoff
    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut retries = 0;
        let mut backoff = self.initial_backoff;

        loop {
            match self.get_once(path, query).await {
                Ok(result) => return Ok(result),
                Err(e) if retries < self.max_retries && Self::is_retryable(&e) => {
                    retries += 1;
                    warn!(
                        "Spoonacular request failed (attempt {}/{}): {}. Retrying in {:?}",
                        retries,
                        self.max_retries,
                        e.log_safe(),
                        backoff
                    );
                    sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("Spoonacular API request: GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("Spoonacular API error: {} - {}", status, error_body);

            return Err(match status {
                StatusCode::PAYMENT_REQUIRED => Error::QuotaExceeded,
                StatusCode::NOT_FOUND => Error::NotFound(format!("Spoonacular resource {path}")),
                StatusCode::UNAUTHORIZED => {
                    Error::Api("Spoonacular authentication failed".to_string())
                }
                _ => Error::Api(format!("HTTP {status}")),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Api(format!("Failed to parse Spoonacular response: {e}")))
    }

    fn is_retryable(error: &Error) -> bool {
        match error {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Fetch a batch of random recipes as raw JSON
    pub async fn fetch_random_recipes(&self) -> Result<Vec<Value>> {
        let query = [
            ("number", self.config.batch_size.to_string()),
            ("includeNutrition", "false".to_string()),
        ];
        let batch: RandomRecipes = self.get("/recipes/random", &query).await?;
        debug!("Fetched {} random recipes", batch.recipes.len());
        Ok(batch.recipes)
    }

    /// Look up substitutes for an ingredient by name
    pub async fn get_substitutes(&self, ingredient_name: &str) -> Result<Substitutes> {
        let query = [("ingredientName", ingredient_name.to_string())];
        let response: SubstitutesResponse =
            self.get("/food/ingredients/substitutes", &query).await?;
        Ok(response.into())
    }

    /// Aisle and price information for an ingredient id
    pub async fn get_ingredient_info(&self, ingredient_id: i64) -> Result<IngredientInformation> {
        let path = format!("/food/ingredients/{ingredient_id}/information");
        self.get(&path, &[]).await
    }
}
