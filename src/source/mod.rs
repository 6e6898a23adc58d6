pub mod http;
pub mod provider;

pub use http::HttpSource;
pub use provider::{EntrySource, FetchError};
