use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Result, RpcClientError};

pub const JSONRPC_VERSION: &str = "2.0";

/// Every request this client builds carries the same id.
pub const DEFAULT_REQUEST_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id: DEFAULT_REQUEST_ID,
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
    /// Exact body text as received. Never part of the wire format.
    #[serde(skip)]
    pub raw_response: String,
}

impl RpcResponse {
    /// Parses a response body. The body must be a JSON object; anything else
    /// is a parse failure that still carries the raw text.
    pub fn from_body(body: impl Into<String>) -> Result<Self> {
        let raw_response = body.into();

        let parsed = serde_json::from_str::<Map<String, Value>>(&raw_response)
            .and_then(|object| serde_json::from_value::<RpcResponse>(Value::Object(object)));

        match parsed {
            Ok(mut response) => {
                response.raw_response = raw_response;
                Ok(response)
            }
            Err(source) => Err(RpcClientError::Parse {
                source,
                raw_response,
            }),
        }
    }

    /// Turns a response carrying an error object into `RpcClientError::Rpc`.
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(error) => Err(RpcClientError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data,
                raw_response: self.raw_response,
            }),
            None => Ok(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
