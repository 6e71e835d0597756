use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

pub type SdkError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_blogs: usize,
    pub longest_blog: String,
    pub blogs_with_privacy: usize,
    pub unique_blog_titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct BlogInsightsClient {
    client: Client,
    base_url: String,
}

impl BlogInsightsClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch aggregate statistics. Non-2xx responses become errors carrying the body.
    pub async fn stats(&self) -> Result<BlogStats, SdkError> {
        let resp = self.stats_raw().await?;
        decode(resp).await
    }

    /// Search blog titles. Matching blogs are returned as raw JSON objects.
    pub async fn search(&self, query: &str) -> Result<Vec<serde_json::Value>, SdkError> {
        let resp = self.search_raw(Some(query)).await?;
        decode(resp).await
    }

    pub async fn stats_raw(&self) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}/api/blog-stats", self.base_url))
            .send()
            .await
    }

    /// Search without decoding; `None` omits the `query` parameter entirely.
    pub async fn search_raw(&self, query: Option<&str>) -> Result<Response, reqwest::Error> {
        let mut req = self.client.get(format!("{}/api/blog-search", self.base_url));
        if let Some(q) = query {
            req = req.query(&[("query", q)]);
        }
        req.send().await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        return Err(format!("Service returned error status {}: {}", status, text).into());
    }

    Ok(serde_json::from_str::<T>(&text)?)
}
