//! Outbound gateway to the upstream search endpoint
//!
//! A [`SearchGateway`] turns a [`SearchRequest`] into one HTTP GET and hands
//! back the decoded `results` array. The HTTP layer sits behind
//! [`SearchTransport`] so tests can observe requests without a network.

use std::sync::Arc;

use async_trait::async_trait;

use super::config::{API_HOST_HEADER, API_KEY_HEADER, DEFAULT_LIMIT, TwitterConfig};
use super::error::{Result, TwitterError};
use super::types::{Post, SearchEnvelope, Section};

/// Parameters for one search call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub section: Section,
    pub limit: u32,
    pub min_retweets: Option<u64>,
    pub min_likes: Option<u64>,
    pub min_replies: Option<u64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub language: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            section: Section::default(),
            limit: DEFAULT_LIMIT,
            min_retweets: None,
            min_likes: None,
            min_replies: None,
            start_date: None,
            end_date: None,
            language: None,
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_retweets(mut self, value: Option<u64>) -> Self {
        self.min_retweets = value;
        self
    }

    pub fn min_likes(mut self, value: Option<u64>) -> Self {
        self.min_likes = value;
        self
    }

    pub fn min_replies(mut self, value: Option<u64>) -> Self {
        self.min_replies = value;
        self
    }

    pub fn start_date(mut self, value: Option<String>) -> Self {
        self.start_date = value;
        self
    }

    pub fn end_date(mut self, value: Option<String>) -> Self {
        self.end_date = value;
        self
    }

    pub fn language(mut self, value: Option<String>) -> Self {
        self.language = value;
        self
    }

    /// Query-string pairs in upstream order.
    ///
    /// Optional filters are only appended when set; zero thresholds and empty
    /// strings are treated as unset.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("section", self.section.to_string()),
            ("limit", self.limit.to_string()),
        ];

        let counts = [
            ("min_retweets", self.min_retweets),
            ("min_likes", self.min_likes),
            ("min_replies", self.min_replies),
        ];
        for (key, value) in counts {
            if let Some(v) = value.filter(|v| *v > 0) {
                pairs.push((key, v.to_string()));
            }
        }

        let texts = [
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("language", &self.language),
        ];
        for (key, value) in texts {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }

        pairs
    }
}

/// A fully assembled outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
}

/// Executes an [`UpstreamRequest`] and returns the decoded JSON body
#[async_trait]
pub trait SearchTransport: Send + Sync + std::fmt::Debug {
    async fn get_json(&self, request: &UpstreamRequest) -> Result<serde_json::Value>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let user_agent = Self::format_user_agent();
        tracing::info!("Creating HTTP client with User-Agent: {}", user_agent);

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    fn format_user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn get_json(&self, request: &UpstreamRequest) -> Result<serde_json::Value> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TwitterError::Upstream(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Stateless gateway; cheap to clone and safe to share between calls
#[derive(Debug, Clone)]
pub struct SearchGateway {
    config: TwitterConfig,
    transport: Arc<dyn SearchTransport>,
}

impl SearchGateway {
    pub fn new(config: TwitterConfig, transport: Arc<dyn SearchTransport>) -> Self {
        Self { config, transport }
    }

    /// Gateway using the reqwest transport
    pub fn with_http(config: TwitterConfig) -> Result<Self> {
        Ok(Self::new(config, Arc::new(HttpTransport::new()?)))
    }

    /// Assemble the outbound request, failing if no credential is configured.
    pub fn build_request(&self, request: &SearchRequest) -> Result<UpstreamRequest> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(TwitterError::missing_api_key)?;

        Ok(UpstreamRequest {
            url: self.config.search_url(),
            query: request.query_pairs(),
            headers: vec![
                (API_KEY_HEADER, api_key.to_string()),
                (API_HOST_HEADER, self.config.api_host().to_string()),
            ],
        })
    }

    /// Run one search and return the posts in upstream order.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Post>> {
        let upstream = self.build_request(request)?;

        tracing::debug!(
            url = %upstream.url,
            query = %request.query,
            section = %request.section,
            limit = request.limit,
            "Sending search request"
        );

        let body = self.transport.get_json(&upstream).await?;
        let envelope: SearchEnvelope = serde_json::from_value(body)?;
        let posts = envelope.into_posts();

        tracing::debug!(count = posts.len(), "Search returned results");
        Ok(posts)
    }
}
