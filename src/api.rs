use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::quote::Quote;

/// A record from the remote source; only the title is used
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePost {
    #[serde(default)]
    pub title: String,
}

/// Map remote records into quotes
///
/// Only the first `limit` records are considered. Records with a blank
/// title are dropped.
pub fn map_posts(posts: Vec<RemotePost>, limit: usize, category: &str) -> Vec<Quote> {
    posts
        .into_iter()
        .take(limit)
        .filter_map(|post| Quote::new(&post.title, category).ok())
        .collect()
}

#[derive(Clone)]
pub struct QuoteClient {
    endpoint: String,
    client: Client,
}

impl QuoteClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_posts(&self) -> Result<Vec<RemotePost>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to fetch quotes")?
            .error_for_status()
            .context("Quote source returned an error")?;

        let text = response.text().await.context("Failed to read response")?;
        let posts: Vec<RemotePost> =
            serde_json::from_str(&text).context("Failed to parse quotes response")?;

        Ok(posts)
    }

    pub async fn publish_quote(&self, quote: &Quote) -> Result<()> {
        self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json; charset=UTF-8")
            .body(serde_json::to_string(quote)?)
            .send()
            .await
            .context("Failed to publish quote")?
            .error_for_status()
            .context("Quote source rejected publish")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> RemotePost {
        RemotePost {
            title: title.to_string(),
        }
    }

    #[test]
    fn test_map_posts_caps_at_limit() {
        let posts = (0..10).map(|i| post(&format!("title {i}"))).collect();
        let quotes = map_posts(posts, 5, "Server");

        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[4].text, "title 4");
        assert!(quotes.iter().all(|q| q.category == "Server"));
    }

    #[test]
    fn test_map_posts_drops_blank_titles() {
        let quotes = map_posts(vec![post(""), post("  "), post("kept")], 5, "Server");
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "kept");
    }

    #[test]
    fn test_remote_post_ignores_other_fields() {
        let json = r#"[{"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia"}]"#;
        let posts: Vec<RemotePost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts[0].title, "sunt aut facere");
    }
}
