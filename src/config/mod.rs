pub mod resolve_config;

pub use resolve_config::{NormalizedConfig, RpcClientConfig, parse_endpoint, resolve_config};
