#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    #[error("Invalid RPC endpoint url {url:?}: {source}")]
    InvalidArgument {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed JSON-RPC response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw_response: String,
    },

    #[error("JSON-RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
        raw_response: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("RPC client has been closed")]
    Closed,

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl RpcClientError {
    /// The verbatim response body, for errors raised after a body was read.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Parse { raw_response, .. } | Self::Rpc { raw_response, .. } => {
                Some(raw_response.as_str())
            }
            _ => None,
        }
    }

    /// The server's error code when the failure is a JSON-RPC error object.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcClientError>;
