pub mod client;
pub mod error_mapping;
pub mod request_builder;

pub use client::HttpClientImpl;
pub use error_mapping::{map_reqwest_error, map_source_chain};
pub use request_builder::{RequestBuilderImpl, ACCEPT_HEADER, ACCEPT_LANGUAGE_HEADER, DEFAULT_USER_AGENT};
