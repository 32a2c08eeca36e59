//! # paylane-rs
//!
//! A Rust client for the PayLane REST payment API.
//!
//! Each supported payment operation (card sales, authorizations, captures, refunds,
//! 3-D Secure checks, direct debit, bank transfer, PayPal, Sofort, iDEAL) is one
//! method that sends a JSON body to a fixed endpoint with HTTP Basic authentication
//! and returns the decoded JSON response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paylane_rs::client::PayLaneClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PayLaneClient::new("merchant", "secret")?;
//!
//! let response = client
//!     .card_sale_by_token(&json!({
//!         "sale": {"amount": 19.99, "currency": "EUR", "description": "Order #42"},
//!         "customer": {"name": "John Doe", "email": "john@doe.com", "ip": "127.0.0.1"},
//!         "card": {"token": "abc123"}
//!     }))
//!     .await?;
//!
//! if response.is_success() {
//!     println!("sale id: {:?}", response.get("id_sale"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A blocking variant with the same methods lives in [`blocking`].
//!
//! ## Request Flow
//!
//! 1. Parameters (a map or any `Serialize` record) are converted to JSON
//! 2. The operation's path is appended to the base URL
//! 3. The request is sent with the operation's verb; GET requests carry the body too
//! 4. 400, 401 and 500-504 statuses abort with [`PayLaneError::RemoteHttpError`]
//! 5. The body is decoded; a non-JSON body yields a response without data
//! 6. `success` is set when the body contains `"success": true`
//!
//! Calls are single attempt. Retrying is left to the caller.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod blocking;
pub mod client;
pub mod errors;
pub mod operations;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use client::{ClientConfig, PayLaneClient, DEFAULT_API_URL};
pub use errors::{PayLaneError, Result};
pub use operations::{HttpVerb, Operation, OperationSpec, OPERATIONS};
pub use types::{Params, PaymentResponse};
