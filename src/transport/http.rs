use async_trait::async_trait;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::Result;
use crate::config::{NormalizedConfig, parse_endpoint};
use crate::transport::RpcTransport;
use crate::types::Credentials;

/// `"Basic <base64(user:pass)>"`
pub fn basic_auth_header(user: &str, pass: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
    format!("Basic {token}")
}

#[derive(Clone)]
pub struct HttpTransport {
    url: Url,
    client: reqwest::Client,
    /// Precomputed `Authorization` value, sent on every request when set
    authorization: Option<String>,
}

impl HttpTransport {
    pub fn new(url: &str, rpc_user: Option<&str>, rpc_pass: Option<&str>) -> Result<Self> {
        let url = parse_endpoint(url)?;
        Ok(Self::build(url, Credentials::new(rpc_user, rpc_pass).as_ref()))
    }

    pub fn from_config(config: &NormalizedConfig) -> Self {
        Self::build(config.url.clone(), config.credentials.as_ref())
    }

    /// Wraps a caller-configured client. Its default headers are left untouched.
    pub fn with_client(url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            url: parse_endpoint(url)?,
            client,
            authorization: None,
        })
    }

    fn build(url: Url, credentials: Option<&Credentials>) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            authorization: credentials
                .map(|credentials| basic_auth_header(&credentials.user, &credentials.pass)),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn has_authorization(&self) -> bool {
        self.authorization.is_some()
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, body: String) -> Result<String> {
        let mut request = self.client.post(self.url.clone()).body(body);
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::trace!(url = %self.url, status = %status, body = %text, "RPC response received");

        Ok(text)
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url.as_str())
            .field("has_authorization", &self.authorization.is_some())
            .finish()
    }
}
