pub mod service;
pub mod twitter;
pub mod util;

pub use service::TwitterSearchService;
