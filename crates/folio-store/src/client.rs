use url::Url;

use crate::error::StoreError;
use crate::types::Post;

/// Client for the posts table of a PostgREST-style content store.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url).map_err(|source| StoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        })
    }

    fn posts_endpoint(&self) -> Result<Url, StoreError> {
        let mut url =
            self.base_url
                .join("rest/v1/posts")
                .map_err(|source| StoreError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    source,
                })?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("published", "eq.true")
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    /// Fetches all published posts, newest first.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, StoreError> {
        let url = self.posts_endpoint()?;
        tracing::debug!(url = %url, "fetching posts from content store");

        let response = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(StoreError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(StoreError::Decode)?;
        tracing::debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_shape() {
        let client = StoreClient::new("https://example.supabase.co", "key").unwrap();
        let url = client.posts_endpoint().unwrap();
        assert_eq!(url.path(), "/rest/v1/posts");
        let query = url.query().unwrap();
        assert!(query.contains("published=eq.true"));
        assert!(query.contains("order=created_at.desc"));
    }

    #[test]
    fn rejects_garbage_base_url() {
        assert!(StoreClient::new("not a url", "key").is_err());
    }
}
