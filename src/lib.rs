pub mod client;
pub mod config;
pub mod error;
pub mod jsonrpc;
pub mod logging;
pub mod transport;
pub mod types;

pub use client::RpcClient;
pub use error::{Result, RpcClientError};
pub use jsonrpc::{DEFAULT_REQUEST_ID, JSONRPC_VERSION, JsonRpcError, RpcRequest, RpcResponse};
pub use types::{Credentials, LogLevel};

// Re-export commonly used items
pub use config::{NormalizedConfig, RpcClientConfig, resolve_config};
pub use transport::{HttpTransport, RpcTransport, basic_auth_header};
