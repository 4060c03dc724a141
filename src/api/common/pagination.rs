//
//  bitbucket-server-api
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Types for Bitbucket Server API Responses
//!
//! Bitbucket Server uses offset-based pagination: pages are requested with a
//! 0-indexed `start` parameter and a `limit`, and each response reports
//! whether more pages exist via `isLastPage`/`nextPageStart`.
//!
//! # Pagination Strategy
//!
//! To iterate through all pages:
//! 1. Make the initial request with `start=0` and the desired `limit`
//! 2. Check [`has_next()`](PaginatedResponse::has_next)
//! 3. Use [`next_start()`](PaginatedResponse::next_start) as the `start`
//!    value of the next request
//! 4. Repeat until `has_next()` returns `false`
//!
//! The library never merges pages itself; each response is handed to the
//! caller exactly as the server produced it.

use serde::{Deserialize, Serialize};

/// Paginated response envelope from the Bitbucket Server API.
///
/// Represents a single page of results. The `limit` field reflects the
/// requested page size; `size` is the number of items actually present in
/// this page.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `values` array
///
/// # Example
///
/// ```rust
/// use bitbucket_server_api::PaginatedResponse;
/// use serde::Deserialize;
///
/// #[derive(Clone, Deserialize)]
/// struct Project {
///     key: String,
///     name: String,
/// }
///
/// let json = r#"{
///     "values": [{"key": "PROJ", "name": "My Project"}],
///     "size": 1,
///     "limit": 25,
///     "isLastPage": false,
///     "nextPageStart": 25,
///     "start": 0
/// }"#;
///
/// let page: PaginatedResponse<Project> = serde_json::from_str(json).unwrap();
/// assert!(page.has_next());
/// assert_eq!(page.next_start(), Some(25));
/// ```
///
/// # Notes
///
/// - The `start` parameter is 0-indexed (first item is at index 0)
/// - When `is_last_page` is `true`, `next_page_start` is `None`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Array of items in the current page.
    ///
    /// May be empty if the query returned no results.
    pub values: Vec<T>,

    /// Number of items in the current page.
    ///
    /// Always less than or equal to `limit`.
    #[serde(default)]
    pub size: u32,

    /// Maximum items per page, as requested.
    #[serde(default)]
    pub limit: u32,

    /// Whether this is the final page of results.
    #[serde(default, rename = "isLastPage")]
    pub is_last_page: bool,

    /// Start index for the next page of results.
    ///
    /// `None` when `is_last_page` is `true`.
    #[serde(default, rename = "nextPageStart")]
    pub next_page_start: Option<u32>,

    /// Start index of the current page (0-indexed).
    #[serde(default)]
    pub start: u32,
}

impl<T> PaginatedResponse<T> {
    /// Checks if there are more pages of results available.
    ///
    /// This is the inverse of `is_last_page`; prefer it in pagination loops
    /// for clarity.
    pub fn has_next(&self) -> bool {
        !self.is_last_page
    }

    /// Returns the start index for the next page of results.
    ///
    /// Use the returned value as the `start` field of the next request's
    /// [`RequestOptions`](crate::RequestOptions). Returns `None` when
    /// [`has_next()`](Self::has_next) would return `false`.
    pub fn next_start(&self) -> Option<u32> {
        self.next_page_start
    }
}
