use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::twitter::client::{SearchGateway, SearchRequest};
use crate::twitter::config::DEFAULT_LIMIT;
use crate::twitter::error::{Result, TwitterError};
use crate::twitter::format::format_results;
use crate::twitter::query::{normalize_search_query, user_timeline_query};
use crate::twitter::types::Section;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchTwitterParams {
    #[schemars(
        description = "Search query. Use '@username' to search a user's tweets, or the upstream syntax directly (e.g. '(from:openai)', 'rust lang:en')"
    )]
    pub query: String,
    #[schemars(description = "Section to search: 'latest' or 'top' (default: latest)")]
    #[serde(default)]
    pub section: Section,
    #[schemars(description = "Maximum number of tweets to return (default: 10)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[schemars(description = "Only include tweets with at least this many retweets")]
    pub min_retweets: Option<u64>,
    #[schemars(description = "Only include tweets with at least this many likes")]
    pub min_likes: Option<u64>,
    #[schemars(description = "Only include tweets with at least this many replies")]
    pub min_replies: Option<u64>,
    #[schemars(description = "Only include tweets posted on or after this date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Only include tweets posted on or before this date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[schemars(description = "Language code to filter by (e.g. 'en')")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetUserTweetsParams {
    #[schemars(description = "Twitter username, with or without the leading '@'")]
    pub username: String,
    #[schemars(description = "Maximum number of tweets to return (default: 10)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[schemars(description = "Only include tweets with at least this many likes")]
    pub min_likes: Option<u64>,
    #[schemars(description = "Section to search: 'latest' or 'top' (default: latest)")]
    #[serde(default)]
    pub section: Section,
}

#[derive(Debug, Clone)]
pub struct TwitterTools {
    gateway: SearchGateway,
}

impl TwitterTools {
    pub fn new(gateway: SearchGateway) -> Self {
        Self { gateway }
    }

    pub async fn search_twitter(&self, params: SearchTwitterParams) -> String {
        match self.run_search(params).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error searching Twitter: {}", e);
                format!("Error searching Twitter: {e}")
            }
        }
    }

    pub async fn get_user_tweets(&self, params: GetUserTweetsParams) -> String {
        let username = params.username.clone();
        match self.run_user_tweets(params).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error fetching tweets from {}: {}", username, e);
                format!("Error fetching tweets from {username}: {e}")
            }
        }
    }

    async fn run_search(&self, params: SearchTwitterParams) -> Result<String> {
        if params.query.is_empty() {
            return Err(TwitterError::InvalidParams(
                "Search query is required".to_string(),
            ));
        }
        validate_limit(params.limit)?;

        let query = normalize_search_query(&params.query);
        let request = SearchRequest::new(query)
            .section(params.section)
            .limit(params.limit)
            .min_retweets(params.min_retweets)
            .min_likes(params.min_likes)
            .min_replies(params.min_replies)
            .start_date(params.start_date)
            .end_date(params.end_date)
            .language(params.language);

        let posts = self.gateway.search(&request).await?;
        Ok(format_results(&request.query, request.section, &posts))
    }

    async fn run_user_tweets(&self, params: GetUserTweetsParams) -> Result<String> {
        if params.username.is_empty() {
            return Err(TwitterError::InvalidParams(
                "Username is required".to_string(),
            ));
        }
        validate_limit(params.limit)?;

        let request = SearchRequest::new(user_timeline_query(&params.username))
            .section(params.section)
            .limit(params.limit)
            .min_likes(params.min_likes);

        let posts = self.gateway.search(&request).await?;
        Ok(format_results(&request.query, request.section, &posts))
    }
}

fn validate_limit(limit: u32) -> Result<()> {
    if limit == 0 {
        return Err(TwitterError::InvalidParams(
            "Limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
