use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::{
    Result, RpcClientError, RpcRequest, RpcResponse,
    config::{RpcClientConfig, resolve_config},
    transport::{HttpTransport, RpcTransport},
};

/// JSON-RPC 2.0 client bound to a single endpoint.
///
/// The async entry points run on the caller's runtime. The blocking ones
/// spawn the same round trip on a small runtime owned by the client, created
/// on first use, and park the calling thread until it finishes.
pub struct RpcClient {
    transport: RwLock<Option<Arc<dyn RpcTransport>>>,
    endpoint: String,
    runtime: Mutex<Option<Runtime>>,
}

impl RpcClient {
    /// Builds a client posting to `url`. Basic auth is attached only when
    /// both `rpc_user` and `rpc_pass` are non-empty.
    pub fn new(url: &str, rpc_user: Option<&str>, rpc_pass: Option<&str>) -> Result<Self> {
        let transport = HttpTransport::new(url, rpc_user, rpc_pass)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// `log_level` is not applied here; binaries pass it to
    /// [`crate::logging::init_tracing`] themselves.
    pub fn from_config(config: RpcClientConfig) -> Result<Self> {
        let config = resolve_config(config)?;
        let transport = HttpTransport::from_config(&config);
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Uses a caller-configured reqwest client as-is.
    pub fn with_http_client(url: &str, client: reqwest::Client) -> Result<Self> {
        let transport = HttpTransport::with_client(url, client)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Uses a caller-supplied transport. The client only holds a shared
    /// reference: `close` drops that reference and other owners keep theirs.
    pub fn with_transport(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            endpoint: transport.endpoint().to_string(),
            transport: RwLock::new(Some(transport)),
            runtime: Mutex::new(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_closed(&self) -> bool {
        self.transport.read().is_none()
    }

    /// Releases the transport and the blocking runtime. Safe to call repeatedly.
    pub fn close(&self) {
        if self.transport.write().take().is_some() {
            tracing::debug!(url = %self.endpoint, "RPC client closed");
        }

        // shutdown_background never blocks, so this is fine from async code too
        if let Some(runtime) = self.runtime.lock().take() {
            runtime.shutdown_background();
        }
    }

    pub async fn send_async(&self, request: &RpcRequest) -> Result<RpcResponse> {
        let transport = self.transport()?;
        round_trip(transport, &self.endpoint, request).await
    }

    /// Blocking form of [`RpcClient::send_async`]. Works from plain threads,
    /// `spawn_blocking` threads and async tasks alike; in an async task it
    /// parks that worker until the response arrives.
    pub fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        let transport = self.transport()?;
        let handle = self.blocking_handle()?;

        let endpoint = self.endpoint.clone();
        let request = request.clone();
        let task = handle.spawn(async move { round_trip(transport, &endpoint, &request).await });

        match futures::executor::block_on(task) {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            // runtime shut down by a concurrent close
            Err(_) => Err(RpcClientError::Closed),
        }
    }

    /// Calls `method` with positional `params` and returns the `result` member.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        Ok(self.send(&request)?.result)
    }

    pub async fn call_async(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        Ok(self.send_async(&request).await?.result)
    }

    fn transport(&self) -> Result<Arc<dyn RpcTransport>> {
        self.transport.read().clone().ok_or(RpcClientError::Closed)
    }

    fn blocking_handle(&self) -> Result<Handle> {
        let mut slot = self.runtime.lock();
        if let Some(runtime) = slot.as_ref() {
            return Ok(runtime.handle().clone());
        }

        // one worker keeps pooled connections alive between blocking calls
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rpc-client-blocking")
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        *slot = Some(runtime);

        Ok(handle)
    }
}

async fn round_trip(
    transport: Arc<dyn RpcTransport>,
    endpoint: &str,
    request: &RpcRequest,
) -> Result<RpcResponse> {
    let body = request.to_json()?;

    tracing::debug!(
        method = %request.method,
        id = request.id,
        url = %endpoint,
        "Sending RPC request"
    );

    let content = transport.post(body).await?;
    let response = RpcResponse::from_body(content)?;

    if let Some(error) = &response.error {
        tracing::warn!(
            method = %request.method,
            code = error.code,
            message = %error.message,
            "RPC call returned an error"
        );
    }

    response.into_result()
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("endpoint", &self.endpoint)
            .field("closed", &self.is_closed())
            .field("has_blocking_runtime", &self.runtime.lock().is_some())
            .finish()
    }
}
