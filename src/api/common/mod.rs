//
//  bitbucket-server-api
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared vocabulary used by every sub-client: the library error type, the
//! paginated response envelope, and the request option value objects.
//!
//! # Overview
//!
//! - [`Error`] - unified error type for all API operations
//! - [`Result`] - crate-wide result alias
//! - [`PaginatedResponse`] - offset-based page envelope (re-exported from
//!   [`pagination`])
//! - [`RequestOptions`] / [`CommitsOptions`] - per-call paging and
//!   commit-range filters (re-exported from [`options`])
//!
//! # Error Handling
//!
//! The four variants of [`Error`] keep failure conditions distinguishable:
//! a server that rejected the request ([`Error::Api`]) is a different
//! situation from a server that answered 200 with an unexpected body
//! ([`Error::Decode`]), and both differ from never reaching the server at
//! all ([`Error::Network`]). Argument problems are caught before any
//! request is sent ([`Error::InvalidArgument`]).
//!
//! The library never classifies status codes beyond success/failure and
//! never retries; interpreting a 404 versus a 409 is the caller's job.

use reqwest::StatusCode;
use thiserror::Error;

mod options;
mod pagination;

pub use options::*;
pub use pagination::*;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Bitbucket Server API operations.
///
/// # Variants
///
/// | Variant | Meaning |
/// |---------|---------|
/// | `Api` | The server answered with a non-2xx status |
/// | `Decode` | The server answered 2xx but the body did not match the expected shape |
/// | `InvalidArgument` | A malformed call was rejected before any request was sent |
/// | `Network` | The request never completed (DNS, connection refused, timeout) |
///
/// # Example
///
/// ```rust
/// use bitbucket_server_api::Error;
///
/// fn describe(error: &Error) -> String {
///     match error {
///         Error::Api { status, .. } => format!("server said {status}"),
///         Error::Decode { .. } => "unexpected response shape".to_string(),
///         Error::InvalidArgument(message) => format!("bad call: {message}"),
///         Error::Network(_) => "could not reach the server".to_string(),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status code.
    ///
    /// Carries the status and the raw response body so the caller can
    /// interpret 401/403/404/409 as it sees fit. Nothing is retried.
    #[error("API error ({status}): {body}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The raw response body, unparsed.
        body: String,
    },

    /// A 2xx response body did not deserialize into the expected type.
    ///
    /// Distinct from [`Error::Api`] so callers can tell "the server
    /// rejected the request" apart from "the server responded 200 with an
    /// unexpected shape".
    #[error("failed to decode response body: {source}")]
    Decode {
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
        /// The raw body that failed to decode.
        body: String,
    },

    /// A call was malformed and rejected before any network I/O.
    ///
    /// Raised for path template/segment count mismatches and unusable
    /// base URLs. No partial request is ever sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A transport-level failure, surfaced unmodified.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Returns the HTTP status of an [`Error::Api`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
