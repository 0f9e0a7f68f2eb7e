//! Wire types for the upstream search API and the tool parameters built on them

use std::fmt;

use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{
    deserialize_opt_count_from_anything, deserialize_opt_lenient,
    deserialize_opt_string_from_anything, deserialize_opt_string_list,
};

/// Which timeline section the upstream should search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Latest,
    Top,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Latest => "latest",
            Section::Top => "top",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author block embedded in each post
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostAuthor {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_anything")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_anything")]
    pub name: Option<String>,
}

/// A single post from the `results` array.
///
/// Every field is optional and decoded leniently: a field of the wrong shape
/// becomes `None` so one odd post never fails the whole response. The
/// formatter supplies defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_anything")]
    pub tweet_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_lenient")]
    pub user: Option<PostAuthor>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_anything")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_count_from_anything")]
    pub favorite_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_count_from_anything")]
    pub retweet_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_count_from_anything")]
    pub reply_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_anything")]
    pub creation_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_list")]
    pub media_url: Option<Vec<String>>,
}

impl Post {
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }
}

/// Envelope returned by `/search/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub results: Option<Vec<Post>>,
}

impl SearchEnvelope {
    pub fn into_posts(self) -> Vec<Post> {
        self.results.unwrap_or_default()
    }
}
