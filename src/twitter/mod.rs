//! # Twitter Search Module
//!
//! Proxies search requests to the RapidAPI twitter154 search endpoint and
//! renders the results as plain text for MCP clients.
//!
//! ## Key Components
//!
//! - [`query`] - Normalization of user input into the upstream query syntax
//! - [`client`] - Outbound gateway and HTTP transport
//! - [`format`] - Plain-text rendering of result posts
//! - [`tools`] - MCP tool implementations for search operations
//! - [`config`] - Configuration value and constants

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod tools;
pub mod types;

pub use client::{HttpTransport, SearchGateway, SearchRequest, SearchTransport};
pub use config::TwitterConfig;
pub use error::TwitterError;
pub use tools::TwitterTools;
pub use types::{Post, Section};
