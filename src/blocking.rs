//! Blocking PayLane client.
//!
//! Wraps the async [`crate::client::PayLaneClient`] with a private
//! current-thread `tokio` runtime, so every operation blocks the calling
//! thread for one HTTP round trip. Do not use it from within an async runtime;
//! use the async client there instead.

use crate::client::{self, ClientConfig};
use crate::errors::{PayLaneError, Result};
use crate::operations::{with_operation_table, Operation};
use crate::types::{Params, PaymentResponse};
use serde::Serialize;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

/// Blocking PayLane REST client.
///
/// # Examples
///
/// ```no_run
/// use paylane_rs::blocking::PayLaneClient;
/// use serde_json::json;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PayLaneClient::new("merchant", "secret")?;
/// let response = client.refund(&json!({"id_sale": 1234, "amount": 5.0, "reason": "returned"}))?;
/// assert_eq!(response.is_success(), client.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PayLaneClient {
    inner: client::PayLaneClient,
    runtime: Runtime,
}

impl PayLaneClient {
    /// Creates a client for the default endpoint.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(username, password))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let inner = client::PayLaneClient::with_config(config)?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PayLaneError::PreconditionFailed(format!("runtime unavailable: {}", e)))?;

        Ok(Self { inner, runtime })
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Overrides the API base URL for subsequent calls.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.inner.set_url(url);
    }

    /// Toggles TLS certificate verification for subsequent calls.
    pub fn set_ssl_verify(&mut self, ssl_verify: bool) -> Result<()> {
        self.inner.set_ssl_verify(ssl_verify)
    }

    /// Sets or clears the per-request timeout for subsequent calls.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.inner.set_timeout(timeout)
    }

    /// Whether the most recently completed call reported `"success": true`.
    pub fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    /// Invokes a built-in operation.
    pub fn call<P: Serialize + ?Sized>(
        &self,
        operation: Operation,
        params: &P,
    ) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.call(operation, params))
    }

    /// Invokes an arbitrary endpoint; see [`client::PayLaneClient::call_raw`].
    pub fn call_raw<P: Serialize + ?Sized>(
        &self,
        path: &str,
        verb: &str,
        params: &P,
    ) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.call_raw(path, verb, params))
    }
}

macro_rules! blocking_operation {
    (params, $variant:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $method<P: Serialize + ?Sized>(&self, params: &P) -> Result<PaymentResponse> {
            self.call(Operation::$variant, params)
        }
    };
    (none, $variant:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $method(&self) -> Result<PaymentResponse> {
            self.call(Operation::$variant, &Params::new())
        }
    };
}

macro_rules! impl_blocking_operations {
    ($((
        $variant:ident,
        $method:ident,
        $name:literal,
        $path:literal,
        $verb:ident,
        $arity:ident,
        $doc:literal
    )),* $(,)?) => {
        impl PayLaneClient {
            $(blocking_operation!($arity, $variant, $method, $doc);)*
        }
    };
}

with_operation_table!(impl_blocking_operations);
