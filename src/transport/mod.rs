//! HTTP transport: client and header construction.

pub mod headers;
pub mod http;

pub use http::HttpClient;
