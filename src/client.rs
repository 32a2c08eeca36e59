//! Async client for the PayLane REST API.
//!
//! Every public operation funnels through [`PayLaneClient::call_raw`], which
//! serializes the parameters, performs one HTTP exchange with Basic
//! authentication, classifies the outcome and decodes the JSON body.

use crate::errors::{PayLaneError, Result};
use crate::operations::{with_operation_table, Operation};
use crate::types::{Params, PaymentResponse};
use crate::utils::{decode_body, endpoint_url, http_error_phrase, to_params, validate_operation};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Production endpoint of the PayLane REST server.
pub const DEFAULT_API_URL: &str = "https://direct.paylane.com/rest/";

/// Configuration for a PayLane client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL the operation paths are appended to; must end with `/`
    pub base_url: String,

    /// Merchant API username
    username: String,

    /// Merchant API password
    password: String,

    /// Verify TLS certificates (disable only for test endpoints)
    pub ssl_verify: bool,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration pointing at [`DEFAULT_API_URL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use paylane_rs::client::ClientConfig;
    ///
    /// let config = ClientConfig::new("merchant", "secret")
    ///     .with_base_url("https://sandbox.example.com/rest/")
    ///     .with_ssl_verify(false);
    ///
    /// assert_eq!(config.username(), "merchant");
    /// assert!(!config.ssl_verify);
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            username: username.into(),
            password: password.into(),
            ssl_verify: true,
            timeout: None,
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// Reads `PAYLANE_USERNAME` and `PAYLANE_PASSWORD` (required), plus the
    /// optional `PAYLANE_API_URL` and `PAYLANE_SSL_VERIFY` (`false` or `0`
    /// disables verification).
    pub fn from_env() -> Result<Self> {
        let username = required_env("PAYLANE_USERNAME")?;
        let password = required_env("PAYLANE_PASSWORD")?;
        let mut config = Self::new(username, password);

        if let Ok(url) = std::env::var("PAYLANE_API_URL") {
            config.base_url = url;
        }
        if let Ok(verify) = std::env::var("PAYLANE_SSL_VERIFY") {
            let verify = verify.trim().to_ascii_lowercase();
            config.ssl_verify = !matches!(verify.as_str(), "false" | "0");
        }

        Ok(config)
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Enables or disables TLS certificate verification.
    pub fn with_ssl_verify(mut self, ssl_verify: bool) -> Self {
        self.ssl_verify = ssl_verify;
        self
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Merchant API username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ssl_verify", &self.ssl_verify)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(PayLaneError::PreconditionFailed(format!("{} is not set", key))),
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .gzip(true)
        .deflate(true)
        .redirect(reqwest::redirect::Policy::none())
        .danger_accept_invalid_certs(!config.ssl_verify);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| PayLaneError::PreconditionFailed(format!("HTTP client unavailable: {}", e)))
}

/// Async PayLane REST client.
///
/// Each call returns a [`PaymentResponse`] carrying its own success flag. The
/// client additionally remembers whether its most recent call succeeded, see
/// [`PayLaneClient::is_success`]; with concurrent calls on one instance that
/// flag reflects whichever call finished last.
///
/// Dropping a returned future cancels the request. Calls are never retried.
pub struct PayLaneClient {
    config: ClientConfig,
    http: Client,
    last_success: AtomicBool,
}

impl PayLaneClient {
    /// Creates a client for the default endpoint.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use paylane_rs::client::PayLaneClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PayLaneClient::new("merchant", "secret")?;
    ///
    /// let response = client.get_sale_info(&json!({"id_sale": 1234})).await?;
    /// if response.is_success() {
    ///     println!("{:?}", response.get("status"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(username, password))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.username.is_empty() || config.password.is_empty() {
            return Err(PayLaneError::PreconditionFailed(
                "username and password must be non-empty".to_string(),
            ));
        }

        let http = build_http_client(&config)?;

        Ok(Self {
            config,
            http,
            last_success: AtomicBool::new(false),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Overrides the API base URL for subsequent calls.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.config.base_url = url.into();
    }

    /// Toggles TLS certificate verification for subsequent calls.
    pub fn set_ssl_verify(&mut self, ssl_verify: bool) -> Result<()> {
        if self.config.ssl_verify != ssl_verify {
            let mut config = self.config.clone();
            config.ssl_verify = ssl_verify;
            self.http = build_http_client(&config)?;
            self.config = config;
        }
        Ok(())
    }

    /// Sets or clears the per-request timeout for subsequent calls.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        let mut config = self.config.clone();
        config.timeout = timeout;
        self.http = build_http_client(&config)?;
        self.config = config;
        Ok(())
    }

    /// Whether the most recently completed call reported `"success": true`.
    pub fn is_success(&self) -> bool {
        self.last_success.load(Ordering::SeqCst)
    }

    /// Invokes a built-in operation.
    pub async fn call<P: Serialize + ?Sized>(
        &self,
        operation: Operation,
        params: &P,
    ) -> Result<PaymentResponse> {
        self.call_raw(operation.path(), operation.verb().as_str(), params)
            .await
    }

    /// Invokes an arbitrary endpoint.
    ///
    /// `path` is appended to the base URL and must be non-empty; `verb` must be
    /// one of `get`, `put`, `post` or `delete` in any case. The JSON body is sent
    /// for every verb, GET and DELETE included. Paths containing `.` or `..`
    /// segments are rejected, since URL parsing would collapse them. Redirects
    /// are not followed: a 3xx response is decoded like any other non-fatal
    /// status.
    pub async fn call_raw<P: Serialize + ?Sized>(
        &self,
        path: &str,
        verb: &str,
        params: &P,
    ) -> Result<PaymentResponse> {
        self.last_success.store(false, Ordering::SeqCst);

        let params = to_params(params)?;
        let verb = validate_operation(path, verb)?;
        let body = serde_json::to_string(&params)?;

        let url = endpoint_url(&self.config.base_url, path)?;
        debug!(path, %verb, %url, "Dispatching PayLane request");

        let response = self
            .http
            .request(verb.to_method(), url.clone())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "PayLane request failed");
                PayLaneError::TransportError {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status().as_u16();
        if let Some(phrase) = http_error_phrase(status) {
            warn!(%url, status, "PayLane returned an error status");
            return Err(PayLaneError::RemoteHttpError { code: status, phrase });
        }

        let text = response
            .text()
            .await
            .map_err(|e| PayLaneError::TransportError {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let data = decode_body(&text);
        if data.is_none() {
            warn!(%url, status, "PayLane response body is not a JSON object");
        }

        let result = PaymentResponse::new(data);
        self.last_success.store(result.success, Ordering::SeqCst);
        debug!(path, status, success = result.success, "PayLane response received");

        Ok(result)
    }
}

macro_rules! async_operation {
    (params, $variant:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        pub async fn $method<P: Serialize + ?Sized>(&self, params: &P) -> Result<PaymentResponse> {
            self.call(Operation::$variant, params).await
        }
    };
    (none, $variant:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        pub async fn $method(&self) -> Result<PaymentResponse> {
            self.call(Operation::$variant, &Params::new()).await
        }
    };
}

macro_rules! impl_async_operations {
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
            $(async_operation!($arity, $variant, $method, $doc);)*
        }
    };
}

with_operation_table!(impl_async_operations);

impl fmt::Debug for PayLaneClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayLaneClient")
            .field("config", &self.config)
            .field("last_success", &self.is_success())
            .finish()
    }
}
