//
//  bitbucket-server-api
//  api/commits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Commit API
//!
//! Commit listing, single-commit lookup, and range queries. Range queries
//! (`range`, `changes`) take an `until` ref and an optional `since` ref;
//! the result is everything reachable from `until` but not from `since` —
//! exclusive of `since`, inclusive of `until`.
//!
//! Timestamps on the wire are Unix milliseconds; they surface as
//! `chrono::DateTime<Utc>` values.
//!
//! ## API Endpoints
//!
//! ```text
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/commits
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/commits/{commitId}
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/changes
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{CommitsOptions, PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;
use crate::api::resource::Resource;

const COMMITS: &str = "rest/api/1.0/projects/{}/repos/{}/commits";
const COMMIT: &str = "rest/api/1.0/projects/{}/repos/{}/commits/{}";
const CHANGES: &str = "rest/api/1.0/projects/{}/repos/{}/changes";

/// Represents a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash.
    pub id: String,

    /// Abbreviated commit hash.
    #[serde(rename = "displayId")]
    pub display_id: String,

    /// The commit author.
    #[serde(default)]
    pub author: Option<CommitPerson>,

    /// When the commit was authored.
    #[serde(rename = "authorTimestamp")]
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[serde(default)]
    pub author_timestamp: Option<DateTime<Utc>>,

    /// The committer, when distinct from the author.
    #[serde(default)]
    pub committer: Option<CommitPerson>,

    /// When the commit was committed.
    #[serde(rename = "committerTimestamp")]
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[serde(default)]
    pub committer_timestamp: Option<DateTime<Utc>>,

    /// Full commit message.
    #[serde(default)]
    pub message: Option<String>,

    /// Parent commits, abbreviated.
    #[serde(default)]
    pub parents: Vec<MinimalCommit>,
}

/// Author/committer identity attached to a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitPerson {
    /// Name as recorded in the commit.
    pub name: String,

    /// Email address as recorded in the commit.
    #[serde(rename = "emailAddress")]
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Abbreviated commit reference, as used in parent lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimalCommit {
    /// Full commit hash.
    pub id: String,

    /// Abbreviated commit hash.
    #[serde(rename = "displayId")]
    pub display_id: String,
}

/// The set of changes between two commits.
///
/// Produced by the `changes` endpoint: everything changed between
/// `from_hash` (exclusive) and `to_hash` (inclusive). Carries its own
/// paging fields because the change list itself is paged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changes {
    /// Lower bound of the range (the `since` ref), when one was given.
    #[serde(rename = "fromHash")]
    #[serde(default)]
    pub from_hash: Option<String>,

    /// Upper bound of the range (the `until` ref).
    #[serde(rename = "toHash")]
    pub to_hash: String,

    /// The changes in this page.
    #[serde(default)]
    pub values: Vec<Change>,

    /// Number of changes in this page.
    #[serde(default)]
    pub size: u32,

    /// Whether this page completes the change list.
    #[serde(rename = "isLastPage")]
    #[serde(default)]
    pub is_last_page: bool,

    /// Start index of this page.
    #[serde(default)]
    pub start: u32,

    /// Requested page size.
    #[serde(default)]
    pub limit: u32,

    /// Start index of the next page, when one exists.
    #[serde(rename = "nextPageStart")]
    #[serde(default)]
    pub next_page_start: Option<u32>,
}

/// A single changed path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change {
    /// Content hash of the path after the change.
    #[serde(rename = "contentId")]
    #[serde(default)]
    pub content_id: Option<String>,

    /// The changed path.
    pub path: ChangePath,

    /// Kind of change: `ADD`, `MODIFY`, `DELETE`, `MOVE`, `COPY`.
    #[serde(rename = "type")]
    #[serde(default)]
    pub change_type: Option<String>,

    /// Node kind: `FILE` or `DIRECTORY`.
    #[serde(rename = "nodeType")]
    #[serde(default)]
    pub node_type: Option<String>,
}

/// A path split into its components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePath {
    /// All path components in order.
    #[serde(default)]
    pub components: Vec<String>,

    /// Parent directory, when not at the repository root.
    #[serde(default)]
    pub parent: Option<String>,

    /// Final path component.
    pub name: String,

    /// File extension, when present.
    #[serde(default)]
    pub extension: Option<String>,

    /// The full path as one string.
    #[serde(rename = "toString")]
    #[serde(default)]
    pub full_path: Option<String>,
}

/// Sub-client for the commit API area.
#[derive(Debug)]
pub struct Commits {
    commits: Resource<Commit>,
}

impl Commits {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            commits: Resource::new(worker, COMMITS, COMMIT),
        }
    }

    fn worker(&self) -> &HttpClient {
        self.commits.worker()
    }

    /// Retrieves one page of the repository's commit history.
    ///
    /// `options` can scope the history with `since`/`until` in addition to
    /// paging; unset fields fall back to the server defaults (the default
    /// branch, first page).
    pub async fn list(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&CommitsOptions>,
    ) -> Result<PaginatedResponse<Commit>> {
        let mut url = self.commits.collection_url(&[project_key, repo_slug])?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker().get(url).await
    }

    /// Retrieves a single commit by its hash.
    pub async fn get(&self, project_key: &str, repo_slug: &str, commit_id: &str) -> Result<Commit> {
        self.commits.get(&[project_key, repo_slug, commit_id]).await
    }

    /// Retrieves the commits reachable from `until` but not from `since`.
    ///
    /// The range is exclusive of `since` and inclusive of `until`: the
    /// `since` commit itself never appears in the result. With `since`
    /// unset, the full history from `until` is returned.
    pub async fn range(
        &self,
        project_key: &str,
        repo_slug: &str,
        until: &str,
        since: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Commit>> {
        let mut url = self.commits.collection_url(&[project_key, repo_slug])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("until", until);
            if let Some(since) = since {
                pairs.append_pair("since", since);
            }
        }
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker().get(url).await
    }

    /// Retrieves the changes introduced between `since` and `until`.
    ///
    /// Same range semantics as [`range`](Self::range): the returned
    /// [`Changes::to_hash`] equals `until`, and nothing introduced at or
    /// before `since` is included.
    pub async fn changes(
        &self,
        project_key: &str,
        repo_slug: &str,
        until: &str,
        since: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<Changes> {
        let mut url = self.worker().rest_url(CHANGES, &[project_key, repo_slug])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("until", until);
            if let Some(since) = since {
                pairs.append_pair("since", since);
            }
        }
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker().get(url).await
    }
}
