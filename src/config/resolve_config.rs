use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{Credentials, LogLevel};
use crate::{Result, RpcClientError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcClientConfig {
    /// Absolute URL every request is posted to
    pub url: String,
    #[serde(default)]
    pub rpc_user: Option<String>,
    #[serde(default)]
    pub rpc_pass: Option<String>,
    /// Not applied by the client. The embedding binary hands it to
    /// `logging::init_tracing` before building the client.
    #[serde(default)]
    pub log_level: LogLevel,
}

impl RpcClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            rpc_user: None,
            rpc_pass: None,
            log_level: LogLevel::default(),
        }
    }

    pub fn with_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.rpc_user = Some(user.into());
        self.rpc_pass = Some(pass.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedConfig {
    /// The parsed endpoint
    pub url: Url,
    /// Present only when both user and password were non-empty
    pub credentials: Option<Credentials>,
    pub log_level: LogLevel,
}

pub fn parse_endpoint(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| RpcClientError::InvalidArgument {
        url: url.to_string(),
        source,
    })
}

pub fn resolve_config(config: RpcClientConfig) -> Result<NormalizedConfig> {
    Ok(NormalizedConfig {
        url: parse_endpoint(&config.url)?,
        credentials: Credentials::new(config.rpc_user.as_deref(), config.rpc_pass.as_deref()),
        log_level: config.log_level,
    })
}
