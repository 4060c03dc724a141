//
//  bitbucket-server-api
//  api/pull_requests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Pull Request API
//!
//! Listing, lookup, and creation of pull requests. Listing accepts a state
//! filter; `ALL` is accepted by the server as a filter value even though no
//! stored pull request ever carries it.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/pull-requests
//! GET      /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/pull-requests/{id}
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;
use crate::api::repositories::Repository;
use crate::api::resource::Resource;
use crate::api::users::User;

const PULL_REQUESTS: &str = "rest/api/1.0/projects/{}/repos/{}/pull-requests";
const PULL_REQUEST: &str = "rest/api/1.0/projects/{}/repos/{}/pull-requests/{}";

/// State filter for pull request listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestState {
    /// Open pull requests only (the server default).
    Open,
    /// Declined pull requests only.
    Declined,
    /// Merged pull requests only.
    Merged,
    /// Every pull request regardless of state.
    All,
}

impl PullRequestState {
    /// The wire name of the state, as used in the `state` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Declined => "DECLINED",
            Self::Merged => "MERGED",
            Self::All => "ALL",
        }
    }
}

/// A ref (branch head) as embedded in pull requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ref {
    /// Fully qualified ref id, e.g. `refs/heads/feature/widget`.
    pub id: String,

    /// Short display form of the ref.
    #[serde(rename = "displayId")]
    #[serde(default)]
    pub display_id: Option<String>,

    /// Commit the ref points at.
    #[serde(rename = "latestCommit")]
    #[serde(default)]
    pub latest_commit: Option<String>,

    /// The repository the ref lives in.
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// A user participating in a pull request, with their role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// The participating user.
    pub user: User,

    /// Role of the participant: `AUTHOR`, `REVIEWER`, or `PARTICIPANT`.
    #[serde(default)]
    pub role: Option<String>,

    /// Whether the participant has approved the pull request.
    #[serde(default)]
    pub approved: bool,
}

/// Represents a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Identifier, unique within the repository.
    pub id: u64,

    /// Version counter used for optimistic locking on updates.
    #[serde(default)]
    pub version: u32,

    /// Title of the pull request.
    pub title: String,

    /// Description, when one was written.
    #[serde(default)]
    pub description: Option<String>,

    /// Current state: `OPEN`, `DECLINED`, or `MERGED`.
    #[serde(default)]
    pub state: Option<String>,

    /// Whether the pull request is open.
    #[serde(default)]
    pub open: bool,

    /// Whether the pull request is closed (declined or merged).
    #[serde(default)]
    pub closed: bool,

    /// When the pull request was created.
    #[serde(rename = "createdDate")]
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    /// When the pull request last changed.
    #[serde(rename = "updatedDate")]
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    /// Source ref the changes come from.
    #[serde(rename = "fromRef")]
    pub from_ref: Ref,

    /// Target ref the changes merge into.
    #[serde(rename = "toRef")]
    pub to_ref: Ref,

    /// The author participant.
    #[serde(default)]
    pub author: Option<Participant>,

    /// Requested reviewers.
    #[serde(default)]
    pub reviewers: Vec<Participant>,

    /// Everyone else who interacted with the pull request.
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Source or target ref specification when creating a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct RefSpec {
    /// Fully qualified ref id, e.g. `refs/heads/feature/widget`.
    pub id: String,

    /// The repository the ref lives in.
    pub repository: RepositorySpec,
}

/// Repository coordinates inside a [`RefSpec`].
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySpec {
    /// Repository slug.
    pub slug: String,

    /// Containing project.
    pub project: ProjectSpec,
}

/// Project coordinates inside a [`RepositorySpec`].
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSpec {
    /// Project key.
    pub key: String,
}

/// Reviewer entry when creating a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerSpec {
    /// The reviewer's user coordinates.
    pub user: UserNameSpec,
}

/// Minimal user reference carrying only the login name.
#[derive(Debug, Clone, Serialize)]
pub struct UserNameSpec {
    /// The user's login name.
    pub name: String,
}

/// Request body for creating a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequestRequest {
    /// Title of the pull request.
    pub title: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source ref the changes come from.
    #[serde(rename = "fromRef")]
    pub from_ref: RefSpec,

    /// Target ref the changes merge into.
    #[serde(rename = "toRef")]
    pub to_ref: RefSpec,

    /// Requested reviewers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<ReviewerSpec>,
}

/// Sub-client for the pull request API area.
#[derive(Debug)]
pub struct PullRequests {
    resource: Resource<PullRequest>,
}

impl PullRequests {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            resource: Resource::new(worker, PULL_REQUESTS, PULL_REQUEST),
        }
    }

    /// Retrieves one page of the repository's pull requests.
    ///
    /// `state` unset means the server default (open pull requests only).
    pub async fn list(
        &self,
        project_key: &str,
        repo_slug: &str,
        state: Option<PullRequestState>,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<PullRequest>> {
        let mut url = self.resource.collection_url(&[project_key, repo_slug])?;
        if let Some(state) = state {
            url.query_pairs_mut().append_pair("state", state.as_str());
        }
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.resource.worker().get(url).await
    }

    /// Retrieves a single pull request by its id.
    pub async fn get(&self, project_key: &str, repo_slug: &str, id: u64) -> Result<PullRequest> {
        self.resource
            .get(&[project_key, repo_slug, &id.to_string()])
            .await
    }

    /// Creates a pull request, returning the server-echoed entity with its
    /// assigned `id` and `version`.
    pub async fn create(
        &self,
        project_key: &str,
        repo_slug: &str,
        pull_request: &CreatePullRequestRequest,
    ) -> Result<PullRequest> {
        self.resource
            .create(&[project_key, repo_slug], pull_request)
            .await
    }
}
