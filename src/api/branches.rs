//
//  bitbucket-server-api
//  api/branches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Branch API
//!
//! Branch listing lives under the core API; creation and deletion go
//! through the `branch-utils` plugin endpoint (deletion sends the branch
//! identifier in the request body), and branch restrictions through the
//! `branch-permissions` endpoint.
//!
//! ## API Endpoints
//!
//! ```text
//! GET         /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/branches
//! POST/DELETE /rest/branch-utils/1.0/projects/{projectKey}/repos/{repoSlug}/branches
//! GET         /rest/branch-utils/1.0/projects/{projectKey}/repos/{repoSlug}/branches/info/{commitId}
//! GET/POST    /rest/branch-permissions/2.0/projects/{projectKey}/repos/{repoSlug}/restrictions
//! DELETE      /rest/branch-permissions/2.0/projects/{projectKey}/repos/{repoSlug}/restrictions/{id}
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;
use crate::api::resource::Resource;
use crate::api::users::User;

const BRANCHES: &str = "rest/api/1.0/projects/{}/repos/{}/branches";
const BRANCH_UTILS: &str = "rest/branch-utils/1.0/projects/{}/repos/{}/branches";
const BRANCHES_FOR_COMMIT: &str = "rest/branch-utils/1.0/projects/{}/repos/{}/branches/info/{}";
const RESTRICTIONS: &str = "rest/branch-permissions/2.0/projects/{}/repos/{}/restrictions";
const RESTRICTION: &str = "rest/branch-permissions/2.0/projects/{}/repos/{}/restrictions/{}";

/// Represents a branch head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Fully qualified ref id, e.g. `refs/heads/master`.
    pub id: String,

    /// Short name of the branch, e.g. `master`.
    #[serde(rename = "displayId")]
    pub display_id: String,

    /// Ref type discriminator; always `BRANCH` for this endpoint.
    #[serde(rename = "type")]
    #[serde(default)]
    pub ref_type: Option<String>,

    /// Commit the branch head points at.
    #[serde(rename = "latestCommit")]
    #[serde(default)]
    pub latest_commit: Option<String>,

    /// Changeset the branch head points at (legacy alias of the commit).
    #[serde(rename = "latestChangeset")]
    #[serde(default)]
    pub latest_changeset: Option<String>,

    /// Whether this is the repository's default branch.
    #[serde(rename = "isDefault")]
    #[serde(default)]
    pub is_default: bool,
}

/// Request body for creating a branch.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBranchRequest {
    /// Short name of the branch to create.
    pub name: String,

    /// Ref or commit the branch should start from.
    #[serde(rename = "startPoint")]
    pub start_point: String,

    /// Optional message recorded with the ref change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for deleting a branch.
///
/// The wrapped API deletes branches via a DELETE request whose body names
/// the branch; with `dry_run` set the server only validates the deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteBranchRequest {
    /// Short name or fully qualified id of the branch to delete.
    pub name: String,

    /// Validate without deleting.
    #[serde(rename = "dryRun")]
    pub dry_run: bool,
}

/// Kind of restriction a branch permission applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchPermissionType {
    /// No pushes of any kind.
    #[serde(rename = "read-only")]
    ReadOnly,
    /// The matched refs cannot be deleted.
    #[serde(rename = "no-deletes")]
    NoDeletes,
    /// Only fast-forward pushes are allowed.
    #[serde(rename = "fast-forward-only")]
    FastForwardOnly,
    /// Changes arrive only through pull requests.
    #[serde(rename = "pull-request-only")]
    PullRequestOnly,
}

/// How a restriction matcher interprets its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchPermissionMatcherKind {
    /// Matches a single branch by name.
    #[serde(rename = "BRANCH")]
    Branch,
    /// Matches branches against a wildcard pattern.
    #[serde(rename = "PATTERN")]
    Pattern,
    /// Matches a branching-model category.
    #[serde(rename = "MODEL_CATEGORY")]
    ModelCategory,
    /// Matches a branching-model branch.
    #[serde(rename = "MODEL_BRANCH")]
    ModelBranch,
}

/// The matcher type object nested inside a matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPermissionMatcherType {
    /// The matcher kind.
    pub id: BranchPermissionMatcherKind,

    /// Human-readable name of the kind.
    #[serde(default)]
    pub name: Option<String>,
}

/// Selects which refs a branch permission applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPermissionMatcher {
    /// Branch name or pattern, per the matcher kind.
    pub id: String,

    /// Display form of the id.
    #[serde(rename = "displayId")]
    pub display_id: String,

    /// Whether the matcher is active.
    #[serde(default)]
    pub active: bool,

    /// The matcher kind object.
    #[serde(rename = "type")]
    pub matcher_type: BranchPermissionMatcherType,
}

/// A branch restriction: one matcher, one restriction type, and the
/// exempted users/groups.
///
/// Setting a permission is a full replacement of the matcher's rule set —
/// submitting a permission with empty `users`/`groups` clears any
/// previously exempted users and groups for that matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPermission {
    /// Server-assigned identifier; absent when submitting a new permission.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Kind of restriction.
    #[serde(rename = "type")]
    pub permission_type: BranchPermissionType,

    /// Which refs the restriction applies to.
    pub matcher: BranchPermissionMatcher,

    /// Users exempt from the restriction.
    #[serde(default)]
    pub users: Vec<User>,

    /// Group names exempt from the restriction.
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Sub-client for the branch API area.
#[derive(Debug)]
pub struct Branches {
    branches: Resource<Branch>,
    restrictions: Resource<BranchPermission>,
}

impl Branches {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            branches: Resource::new(Arc::clone(&worker), BRANCHES, BRANCHES),
            restrictions: Resource::new(worker, RESTRICTIONS, RESTRICTION),
        }
    }

    fn worker(&self) -> &HttpClient {
        self.branches.worker()
    }

    /// Retrieves one page of the repository's branches.
    pub async fn list(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Branch>> {
        self.branches.list(&[project_key, repo_slug], options).await
    }

    /// Retrieves the branches whose history contains a commit.
    pub async fn for_commit(
        &self,
        project_key: &str,
        repo_slug: &str,
        commit_id: &str,
    ) -> Result<PaginatedResponse<Branch>> {
        let url = self
            .worker()
            .rest_url(BRANCHES_FOR_COMMIT, &[project_key, repo_slug, commit_id])?;
        self.worker().get(url).await
    }

    /// Creates a branch, returning the created branch head.
    pub async fn create(
        &self,
        project_key: &str,
        repo_slug: &str,
        branch: &CreateBranchRequest,
    ) -> Result<Branch> {
        let url = self
            .worker()
            .rest_url(BRANCH_UTILS, &[project_key, repo_slug])?;
        self.worker().post(url, branch).await
    }

    /// Deletes a branch. The branch identifier travels in the request body.
    pub async fn delete(
        &self,
        project_key: &str,
        repo_slug: &str,
        branch: &DeleteBranchRequest,
    ) -> Result<()> {
        let url = self
            .worker()
            .rest_url(BRANCH_UTILS, &[project_key, repo_slug])?;
        self.worker().delete_with_body(url, branch).await
    }

    /// Retrieves one page of the repository's branch permissions.
    pub async fn permissions(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<BranchPermission>> {
        self.restrictions
            .list(&[project_key, repo_slug], options)
            .await
    }

    /// Sets a branch permission, returning the stored permission with its
    /// assigned `id`.
    ///
    /// This replaces the matcher's whole rule set; it is not an incremental
    /// patch.
    pub async fn set_permissions(
        &self,
        project_key: &str,
        repo_slug: &str,
        permission: &BranchPermission,
    ) -> Result<BranchPermission> {
        self.restrictions
            .create(&[project_key, repo_slug], permission)
            .await
    }

    /// Deletes a branch permission by its id.
    pub async fn delete_permissions(
        &self,
        project_key: &str,
        repo_slug: &str,
        id: u64,
    ) -> Result<()> {
        self.restrictions
            .delete(&[project_key, repo_slug, &id.to_string()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_round_trip_preserves_mapped_fields() {
        let json = r#"{
            "id": "refs/heads/master",
            "displayId": "master",
            "type": "BRANCH",
            "latestCommit": "abc123",
            "latestChangeset": "abc123",
            "isDefault": true
        }"#;
        let branch: Branch = serde_json::from_str(json).unwrap();
        assert!(branch.is_default);
        assert_eq!(branch.latest_commit.as_deref(), Some("abc123"));

        let back = serde_json::to_value(&branch).unwrap();
        assert_eq!(back["displayId"], "master");
        assert_eq!(back["isDefault"], true);
        assert_eq!(back["latestCommit"], "abc123");
    }

    #[test]
    fn test_delete_request_wire_shape() {
        let request = DeleteBranchRequest {
            name: "test-repo".to_string(),
            dry_run: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dryRun"], false);
        assert_eq!(json["name"], "test-repo");
    }

    #[test]
    fn test_branch_permission_round_trip() {
        let permission = BranchPermission {
            id: None,
            permission_type: BranchPermissionType::ReadOnly,
            matcher: BranchPermissionMatcher {
                id: "**".to_string(),
                display_id: "**".to_string(),
                active: true,
                matcher_type: BranchPermissionMatcherType {
                    id: BranchPermissionMatcherKind::Pattern,
                    name: Some("Pattern".to_string()),
                },
            },
            users: Vec::new(),
            groups: vec!["developers".to_string()],
        };

        let json = serde_json::to_value(&permission).unwrap();
        assert_eq!(json["type"], "read-only");
        assert_eq!(json["matcher"]["type"]["id"], "PATTERN");
        // unset id is omitted entirely from the submission
        assert!(json.get("id").is_none());

        let stored: BranchPermission = serde_json::from_value(serde_json::json!({
            "id": 17,
            "type": "read-only",
            "matcher": json["matcher"],
            "users": [],
            "groups": ["developers"]
        }))
        .unwrap();
        assert_eq!(stored.id, Some(17));
        assert_eq!(stored.permission_type, permission.permission_type);
        assert_eq!(stored.matcher.id, permission.matcher.id);
    }
}
