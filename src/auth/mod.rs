//
//  bitbucket-server-api
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credential types for authenticating against a Bitbucket Server/Data Center
//! instance. The library only supports static credentials: whatever is given
//! at construction is attached, unchanged, to every request for the lifetime
//! of the client.
//!
//! ## Supported Methods
//!
//! - **Basic**: username and password, encoded per RFC 7617
//! - **Encoded Basic**: a pre-computed `base64(username:password)` value, for
//!   callers that keep the encoded pair in configuration
//! - **Bearer**: a personal access token sent as `Bearer <token>`
//!
//! ## Example
//!
//! ```rust
//! use bitbucket_server_api::auth::AuthCredential;
//!
//! let basic = AuthCredential::basic("jdoe", "secret");
//! let token = AuthCredential::bearer("NjM0NTY3ODkw...");
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Static authentication credentials for a Bitbucket Server client.
///
/// Exactly one `Authorization` header is derived from a credential and
/// attached to each request. Credentials never change after construction;
/// build a new client to switch identities.
///
/// # Variants
///
/// - `Basic`: username/password pair, encoded by the library
/// - `EncodedBasic`: caller-supplied `base64(username:password)` value
/// - `Bearer`: personal access token
#[derive(Debug, Clone)]
pub enum AuthCredential {
    /// HTTP basic authentication from a username and password.
    Basic {
        /// The Bitbucket username.
        username: String,
        /// The account password (or token usable as a password).
        password: String,
    },

    /// HTTP basic authentication from a pre-encoded credential.
    ///
    /// The value must already be `base64(username:password)`; it is sent
    /// verbatim as `Basic <encoded>`.
    EncodedBasic {
        /// The base64-encoded `username:password` pair.
        encoded: String,
    },

    /// Bearer token authentication (personal access tokens).
    Bearer {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates a basic-auth credential from a username and password.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a basic-auth credential from a pre-encoded
    /// `base64(username:password)` value.
    pub fn encoded_basic(encoded: impl Into<String>) -> Self {
        Self::EncodedBasic {
            encoded: encoded.into(),
        }
    }

    /// Creates a bearer-token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Applies this credential to a request, attaching the `Authorization`
    /// header.
    ///
    /// # Parameters
    ///
    /// * `request` - The request builder to authenticate
    ///
    /// # Returns
    ///
    /// Returns the builder with exactly one `Authorization` header set.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                let encoded = BASE64.encode(format!("{username}:{password}"));
                request.header(AUTHORIZATION, format!("Basic {encoded}"))
            }
            Self::EncodedBasic { encoded } => {
                request.header(AUTHORIZATION, format!("Basic {encoded}"))
            }
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_encoding_matches_rfc7617() {
        // "user:pass" encodes to the well-known value
        let encoded = BASE64.encode("user:pass");
        assert_eq!(encoded, "dXNlcjpwYXNz");
    }

    #[test]
    fn test_constructors() {
        match AuthCredential::basic("jdoe", "secret") {
            AuthCredential::Basic { username, password } => {
                assert_eq!(username, "jdoe");
                assert_eq!(password, "secret");
            }
            _ => panic!("expected Basic variant"),
        }

        match AuthCredential::bearer("tok") {
            AuthCredential::Bearer { token } => assert_eq!(token, "tok"),
            _ => panic!("expected Bearer variant"),
        }
    }
}
