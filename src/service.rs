use anyhow::Result;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::twitter::{
    SearchGateway, TwitterConfig, TwitterTools,
    tools::{GetUserTweetsParams, SearchTwitterParams},
};

#[derive(Debug, Clone)]
pub struct TwitterSearchService {
    twitter_tools: TwitterTools,
    tool_router: ToolRouter<Self>,
}

impl TwitterSearchService {
    pub fn new(config: TwitterConfig) -> Result<Self> {
        Ok(Self::with_gateway(SearchGateway::with_http(config)?))
    }

    pub fn with_gateway(gateway: SearchGateway) -> Self {
        Self {
            twitter_tools: TwitterTools::new(gateway),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl TwitterSearchService {
    #[tool(
        name = "searchTwitter",
        description = "Search Twitter for tweets matching a query. Use '@username' to find a user's tweets, or pass the upstream query syntax directly (e.g. '(from:openai)', 'rust lang:en'). Supports filtering by minimum retweets, likes and replies, a date range and language. Returns a readable list of tweets with engagement counts and links."
    )]
    pub async fn search_twitter(&self, params: Parameters<SearchTwitterParams>) -> String {
        self.twitter_tools.search_twitter(params.0).await
    }

    #[tool(
        name = "getUserTweets",
        description = "Get recent or top tweets from a specific Twitter user. The username may include the leading '@'. Optionally filter by a minimum number of likes."
    )]
    pub async fn get_user_tweets(&self, params: Parameters<GetUserTweetsParams>) -> String {
        self.twitter_tools.get_user_tweets(params.0).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TwitterSearchService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation::from_build_env(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "MCP server for searching Twitter. Use searchTwitter for keyword or advanced queries (including '@username' shortcuts) and getUserTweets to read a single user's timeline. Results are plain text with one numbered block per tweet.".to_string(),
            ),
            ..Default::default()
        }
    }
}
