use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{Post, PostDraft};
use crate::config::ApiConfig;

/// Client for the `/posts` collection.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: Client,
    base_url: String,
    fetch_limit: u32,
}

impl PostsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(u64::from(secs)));
        }
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(secs)));
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fetch_limit: config.fetch_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /posts?_limit=N`. Any non-2xx status is an error.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts?_limit={}", self.base_url, self.fetch_limit);
        tracing::debug!(%url, "Fetching posts");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }

    /// `POST /posts` with the draft as JSON; returns the server's echo.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let url = format!("{}/posts", self.base_url);
        tracing::debug!(%url, title = %draft.title, "Creating post");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }
}

async fn decode<T: DeserializeOwned>(
    url: String,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode { url, source })
}
