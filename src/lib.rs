//
//  bitbucket-server-api
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Bitbucket Server API Library
//!
//! A typed client library for the Bitbucket Server/Data Center REST API v1.0.
//!
//! ## Overview
//!
//! This library lets an application talk to a self-hosted Bitbucket Server or
//! Data Center instance through typed async method calls instead of hand-built
//! HTTP requests. Every API area (projects, repositories, branches, commits,
//! pull requests, forks, users, groups) is exposed as a sub-client on the
//! top-level [`BitbucketClient`].
//!
//! ## Features
//!
//! - **Typed entities**: JSON responses deserialize into plain data structs
//!   whose serde mappings mirror the wire field names (`displayId`, `scmId`,
//!   `isLastPage`, ...)
//! - **Offset pagination**: list endpoints return a [`PaginatedResponse`]
//!   envelope; callers page with `start`/`limit` via [`RequestOptions`]
//! - **Static authentication**: basic auth, a pre-encoded basic token, or a
//!   bearer token, fixed at construction
//! - **Distinct error conditions**: transport failures, non-2xx responses,
//!   decode mismatches, and argument errors are separate [`Error`] variants
//!
//! ## Module Structure
//!
//! - [`api`]: the HTTP worker, URL building, pagination, and one module per
//!   API resource area
//! - [`auth`]: authentication credential types and header construction
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitbucket_server_api::{BitbucketClient, RequestOptions};
//!
//! # async fn example() -> bitbucket_server_api::Result<()> {
//! let client = BitbucketClient::new("https://bitbucket.example.com", "user", "secret")?;
//!
//! // First page of projects, server-default paging
//! let page = client.projects.list(None).await?;
//! for project in &page.values {
//!     println!("{} ({})", project.name, project.key);
//! }
//!
//! // Explicit paging
//! let options = RequestOptions { start: Some(0), limit: Some(25) };
//! let repos = client.repositories.list("PROJ", Some(&options)).await?;
//! if repos.has_next() {
//!     println!("more repositories from index {:?}", repos.next_start());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! The library performs exactly one HTTP round trip per method call. It does
//! not retry, cache, rate-limit, or impose timeouts; multi-page traversal is
//! the caller's responsibility (call again with `start = next_start()` until
//! `is_last_page`).

/// API client implementations for Bitbucket Server/Data Center.
///
/// Contains the top-level [`BitbucketClient`], the HTTP worker, URL building,
/// pagination types, and one sub-client module per API resource area.
pub mod api;

/// Authentication credential types.
///
/// Supports HTTP basic auth from a username/password pair, a pre-encoded
/// base64 basic token, and bearer tokens. Credentials are fixed for the
/// lifetime of a client.
pub mod auth;

/// Re-export of the top-level client.
///
/// This is the primary entry point; construct it once and use the sub-client
/// fields (`projects`, `repositories`, ...) for every call.
pub use api::client::BitbucketClient;

/// Re-exports of the core request/response vocabulary.
pub use api::common::{CommitsOptions, Error, PaginatedResponse, RequestOptions, Result};

/// Re-export of the credential type accepted by [`BitbucketClient::with_credential`].
pub use auth::AuthCredential;

/// Library version, sent as part of the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
