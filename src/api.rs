use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::StockError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub inventory: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One page of the listing as returned by the list and search endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockPage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub items: Vec<StockItem>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Body of `POST /api/stocks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStock {
    pub name: String,
    pub inventory: i64,
    pub category_id: i64,
}

/// Partial body of `PUT /api/stocks/{id}`; unset fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl StockPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.inventory.is_none() && self.category_id.is_none()
    }
}

/// Acknowledgement of a create or update (`{id, message}` or the full record)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MutationAck {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Which listing endpoint a fetch goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Search,
}

/// Backend operations the list controller depends on
#[async_trait]
pub trait StockApi: Send + Sync {
    async fn fetch_stocks(
        &self,
        endpoint: Endpoint,
        params: &[(String, String)],
    ) -> Result<StockPage, StockError>;

    async fn create_stock(&self, payload: &NewStock) -> Result<MutationAck, StockError>;

    async fn update_stock(&self, id: i64, patch: &StockPatch) -> Result<MutationAck, StockError>;

    async fn delete_stock(&self, id: i64) -> Result<(), StockError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StockError>;
}

/// Endpoint paths, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    pub list: String,
    pub search: String,
    pub stocks: String,
    pub categories: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            list: "/api/stocks".to_string(),
            search: "/api/stocks/search".to_string(),
            stocks: "/api/stocks".to_string(),
            categories: "/api/categories".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct StockClient {
    base_url: String,
    paths: EndpointPaths,
    client: Client,
}

impl StockClient {
    pub fn new(base_url: String, paths: EndpointPaths) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            paths,
            client: Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn stock_path(&self, id: i64) -> String {
        format!("{}/{}", self.paths.stocks.trim_end_matches('/'), id)
    }

    fn listing_path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::List => &self.paths.list,
            Endpoint::Search => &self.paths.search,
        }
    }

    /// Turn a non-2xx response into `StockError::Http`, keeping FastAPI's `detail` if present
    async fn check(
        response: Response,
        method: &'static str,
        path: &str,
    ) -> Result<Response, StockError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .map(|d| d.as_str().map(str::to_string).unwrap_or_else(|| d.to_string()))
            });

        Err(StockError::Http {
            method,
            path: path.to_string(),
            status: status.as_u16(),
            detail,
        })
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        label: &'static str,
        path: &str,
        body: &B,
    ) -> Result<MutationAck, StockError> {
        debug!(%path, "{} request", label);
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;

        let response = Self::check(response, label, path).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl StockApi for StockClient {
    async fn fetch_stocks(
        &self,
        endpoint: Endpoint,
        params: &[(String, String)],
    ) -> Result<StockPage, StockError> {
        let path = self.listing_path(endpoint).to_string();
        debug!(%path, ?params, "GET listing");

        let response = self
            .client
            .get(self.url(&path))
            .query(params)
            .send()
            .await?;

        let response = Self::check(response, "GET", &path).await?;
        Ok(response.json().await?)
    }

    async fn create_stock(&self, payload: &NewStock) -> Result<MutationAck, StockError> {
        let path = self.paths.stocks.clone();
        self.send_json(Method::POST, "POST", &path, payload).await
    }

    async fn update_stock(&self, id: i64, patch: &StockPatch) -> Result<MutationAck, StockError> {
        let path = self.stock_path(id);
        self.send_json(Method::PUT, "PUT", &path, patch).await
    }

    async fn delete_stock(&self, id: i64) -> Result<(), StockError> {
        let path = self.stock_path(id);
        debug!(%path, "DELETE request");

        let response = self.client.delete(self.url(&path)).send().await?;
        Self::check(response, "DELETE", &path).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StockError> {
        let path = self.paths.categories.clone();
        let response = self.client.get(self.url(&path)).send().await?;
        let response = Self::check(response, "GET", &path).await?;
        Ok(response.json().await?)
    }
}
