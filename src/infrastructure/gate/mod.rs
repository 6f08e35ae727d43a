//! Gate control adapters

mod http;

pub use http::HttpGateClient;
