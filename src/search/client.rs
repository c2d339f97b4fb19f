use crate::meal::Meal;
use crate::search::SearchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public TheMealDB endpoint (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Anything that can look meals up by name.
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, SearchError>;
}

/// Body of `search.php`. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    meals: Option<Vec<Meal>>,
}

pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("meal-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search.php", self.base_url)
    }
}

#[async_trait]
impl RecipeService for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, SearchError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("s", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.meals.unwrap_or_default())
    }
}
