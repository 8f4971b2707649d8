//! Client library for the McDonald's mobile-app API (AU market).
//!
//! This crate provides a typed async client over the REST API the GMA
//! Android app talks to. Callers supply a [`reqwest_middleware`] client so a
//! single HTTP stack, including any retry middleware, can be shared across
//! many API clients.
//!
//! # Key Components
//!
//! - [`MaccasClient`]: client with one async method per API endpoint
//! - [`ClientResponse`]: response envelope exposing status, headers, and the
//!   decoded body
//! - [`types`]: serde models for every request and response payload
//! - [`ClientError`]: failure modes, including missing-token errors raised
//!   before any request is sent
//!
//! # Authentication
//!
//! The API uses two bearer tokens. The *login token* comes from
//! [`MaccasClient::security_auth_token`] (basic auth with the client id and
//! secret) and gates customer login, registration, and activation. The *auth
//! token* is the customer access token returned by login or refresh and gates
//! everything else. Token lifecycle is owned by the caller; set tokens with
//! [`MaccasClient::set_login_token`] and [`MaccasClient::set_auth_token`].
//!
//! # Example
//!
//! ```rust,ignore
//! use maccas_client::{MaccasClient, PRODUCTION_BASE_URL};
//! use reqwest_middleware::ClientBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = ClientBuilder::new(reqwest::Client::new()).build();
//!     let mut client = MaccasClient::new(
//!         PRODUCTION_BASE_URL.to_string(),
//!         &http,
//!         "client-id".to_string(),
//!     );
//!
//!     let token = client.security_auth_token("client-secret").await?;
//!     client.set_login_token(&token.body.response.token);
//!
//!     let login = client.customer_login("user@example.com", "hunter2", "sensor").await?;
//!     client.set_auth_token(&login.body.response.access_token);
//!
//!     let offers = client.get_offers(10000.0, -32.0117, 115.8845, "", 480).await?;
//!     println!("{:?}", offers.body);
//!     Ok(())
//! }
//! ```

mod client;
mod constants;
mod error;
pub mod types;

pub use client::MaccasClient;
pub use constants::PRODUCTION_BASE_URL;
pub use error::ClientError;
pub use error::TokenKind;
pub use types::response::ClientResponse;

/// Result alias used by every client operation.
pub type ClientResult<T> = Result<T, ClientError>;
