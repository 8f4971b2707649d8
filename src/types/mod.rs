//! Wire types for the mobile-app API.
//!
//! Request payloads live in [`request`], response payloads in [`response`].
//! Models mirror the API's camelCase JSON exactly, including its spelling
//! quirks, so field renames here are protocol, not style.

pub mod request;
pub mod response;

pub use response::ClientResponse;
