use async_trait::async_trait;

use crate::Result;

pub mod http;

pub use http::{HttpTransport, basic_auth_header};

/// A handle able to POST one JSON-RPC body to a fixed endpoint.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Posts `body` and returns the whole response body as text,
    /// whatever the HTTP status was.
    async fn post(&self, body: String) -> Result<String>;

    /// The endpoint this transport posts to, for diagnostics.
    fn endpoint(&self) -> &str;
}
