use crate::config::toml_config::RemoteConfig;
use crate::core::ResourceGateway;
use crate::domain::model::LearningResource;
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const VIDEO_KIND: &str = "Video Tutorial";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

/// Video search over HTTP (YouTube Data API `search.list` shape).
pub struct HttpResourceGateway {
    client: Client,
    endpoint: String,
    api_key: String,
    query_suffix: String,
    request_timeout: Option<Duration>,
}

impl HttpResourceGateway {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            query_suffix: config.query_suffix.clone(),
            request_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    fn query_for(&self, skill_id: &str) -> String {
        if self.query_suffix.is_empty() {
            skill_id.to_string()
        } else {
            format!("{} {}", skill_id, self.query_suffix)
        }
    }
}

#[async_trait]
impl ResourceGateway for HttpResourceGateway {
    async fn fetch(&self, skill_id: &str, limit: usize) -> Result<Vec<LearningResource>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = self.query_for(skill_id);
        tracing::debug!("Searching videos for '{}' at {}", query, self.endpoint);

        let max_results = limit.to_string();
        let mut request = self.client.get(&self.endpoint).query(&[
            ("q", query.as_str()),
            ("part", "snippet"),
            ("type", "video"),
            ("relevanceLanguage", "en"),
            ("maxResults", max_results.as_str()),
            ("key", self.api_key.as_str()),
        ]);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SkillError::ResourceLookupError {
                skill: skill_id.to_string(),
                message: format!("search endpoint returned {}", status),
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|video_id| LearningResource {
                    title: item.snippet.title,
                    url: format!("{}{}", WATCH_URL, video_id),
                    kind: VIDEO_KIND.to_string(),
                })
            })
            .take(limit)
            .collect())
    }

    fn name(&self) -> &str {
        "video-search"
    }
}
