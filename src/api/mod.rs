//
//  bitbucket-server-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Everything needed to talk to the Bitbucket Server/Data Center REST API
//! v1.0 at `https://<host>/rest/api/1.0`.
//!
//! ## Architecture
//!
//! - [`client`]: the top-level [`BitbucketClient`] that wires one HTTP
//!   worker into every sub-client
//! - [`http`]: the HTTP worker (authentication header, verbs, status
//!   checking, JSON decoding)
//! - [`url`]: pure URL construction from path templates
//! - [`resource`]: the generic resource client the sub-clients are
//!   configured from
//! - [`common`]: shared types (errors, pagination, request options)
//! - One module per API resource area: [`projects`], [`repositories`],
//!   [`branches`], [`commits`], [`pull_requests`], [`forks`], [`users`],
//!   [`groups`]
//!
//! ## Control Flow
//!
//! caller → [`BitbucketClient`] → sub-client → URL builder → HTTP worker →
//! typed result back up the chain. Each call is one independent request;
//! nothing is retried, cached, or batched.

/// Top-level client construction and wiring.
pub mod client;

/// Shared types: errors, pagination envelope, request options.
pub mod common;

/// The HTTP worker all requests funnel through.
pub mod http;

/// URL construction from path templates.
pub(crate) mod url;

/// Generic resource client configured per API area.
pub(crate) mod resource;

/// Project operations and entities.
pub mod projects;

/// Repository, tag, file, and hook operations and entities.
pub mod repositories;

/// Branch, branch-utils, and branch-permission operations and entities.
pub mod branches;

/// Commit and change-range operations and entities.
pub mod commits;

/// Pull request operations and entities.
pub mod pull_requests;

/// Fork listing and entity.
pub mod forks;

/// User administration operations and entity.
pub mod users;

/// Group administration operations and entity.
pub mod groups;

/// Re-export of the top-level client.
pub use client::BitbucketClient;

/// Re-exports of the shared request/response vocabulary.
pub use common::{CommitsOptions, Error, PaginatedResponse, RequestOptions, Result};
