//
//  bitbucket-server-api
//  api/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Repository API
//!
//! Repositories live inside projects and are addressed by project key plus
//! repository slug. Besides the repository CRUD set, this area covers tags,
//! file listing/content browsing, and repository hooks.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST   /rest/api/1.0/projects/{projectKey}/repos
//! GET/DELETE /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}
//! GET        /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/tags
//! POST       /rest/git/1.0/projects/{projectKey}/repos/{repoSlug}/tags
//! DELETE     /rest/git/1.0/projects/{projectKey}/repos/{repoSlug}/tags/{name}
//! GET        /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/files
//! GET        /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/browse/{path}
//! GET        /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/settings/hooks[/{hookKey}]
//! PUT/DELETE /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/settings/hooks/{hookKey}/enabled
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;
use crate::api::resource::Resource;
use crate::api::url::push_file_path;

const REPOSITORIES: &str = "rest/api/1.0/projects/{}/repos";
const REPOSITORY: &str = "rest/api/1.0/projects/{}/repos/{}";
const TAGS: &str = "rest/api/1.0/projects/{}/repos/{}/tags";
const GIT_TAGS: &str = "rest/git/1.0/projects/{}/repos/{}/tags";
const GIT_TAG: &str = "rest/git/1.0/projects/{}/repos/{}/tags/{}";
const FILES: &str = "rest/api/1.0/projects/{}/repos/{}/files";
const BROWSE: &str = "rest/api/1.0/projects/{}/repos/{}/browse";
const HOOKS: &str = "rest/api/1.0/projects/{}/repos/{}/settings/hooks";
const HOOK: &str = "rest/api/1.0/projects/{}/repos/{}/settings/hooks/{}";
const HOOK_ENABLED: &str = "rest/api/1.0/projects/{}/repos/{}/settings/hooks/{}/enabled";

/// Represents a repository in Bitbucket Server/Data Center.
///
/// # Notes
///
/// - The `slug` is derived from the name but may differ (lowercase,
///   hyphenated)
/// - The `state` field indicates if the repository is ready for use
///   (`AVAILABLE`, `INITIALISING`, `INITIALISATION_FAILED`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Unique numeric identifier assigned by the server.
    pub id: u64,

    /// URL-safe identifier used in API endpoints and clone URLs.
    pub slug: String,

    /// Human-readable display name of the repository.
    pub name: String,

    /// Optional description explaining the repository's purpose.
    #[serde(default)]
    pub description: Option<String>,

    /// Reference to the project that contains this repository.
    #[serde(default)]
    pub project: Option<ProjectRef>,

    /// Source control management identifier (typically "git").
    #[serde(rename = "scmId")]
    #[serde(default)]
    pub scm_id: Option<String>,

    /// Current state of the repository.
    #[serde(default)]
    pub state: Option<String>,

    /// Optional message providing additional context about the state.
    #[serde(rename = "statusMessage")]
    #[serde(default)]
    pub status_message: Option<String>,

    /// Whether the repository allows forking.
    #[serde(default)]
    pub forkable: bool,

    /// Whether the repository is publicly accessible.
    #[serde(rename = "public")]
    #[serde(default)]
    pub is_public: bool,

    /// Collection of links for accessing the repository.
    #[serde(default)]
    pub links: RepositoryLinks,
}

/// Reference to a project within a repository context.
///
/// A lightweight representation carrying only the identification fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Unique numeric identifier for the project.
    #[serde(default)]
    pub id: Option<u64>,

    /// Short uppercase key used in URLs and API paths.
    pub key: String,

    /// Human-readable display name of the project.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the project is publicly accessible.
    #[serde(rename = "public")]
    #[serde(default)]
    pub is_public: bool,
}

/// Collection of links associated with a repository.
///
/// Links come back as arrays to support multiple protocols (SSH, HTTPS).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryLinks {
    /// Clone URLs, typically one SSH and one HTTPS entry.
    #[serde(default)]
    pub clone: Vec<CloneLink>,

    /// Self-referential links to the repository in the web UI.
    #[serde(default, rename = "self")]
    pub self_link: Vec<crate::api::projects::SelfLink>,
}

/// A single clone URL with its protocol name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneLink {
    /// The clone URL.
    pub href: String,

    /// The protocol name, e.g. "ssh" or "http".
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for creating a repository within a project.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryRequest {
    /// Human-readable name; the server derives the slug from it.
    pub name: String,

    /// Source control type. The server defaults to "git" when omitted.
    #[serde(rename = "scmId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_id: Option<String>,

    /// Whether the repository allows forking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forkable: Option<bool>,
}

/// A git tag as returned by the tag endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Fully qualified ref id, e.g. `refs/tags/v1.0.0`.
    pub id: String,

    /// Short name of the tag, e.g. `v1.0.0`.
    #[serde(rename = "displayId")]
    pub display_id: String,

    /// Ref type discriminator; always `TAG` for this endpoint.
    #[serde(rename = "type")]
    #[serde(default)]
    pub ref_type: Option<String>,

    /// Commit the tag points at.
    #[serde(rename = "latestCommit")]
    #[serde(default)]
    pub latest_commit: Option<String>,

    /// Changeset the tag points at (legacy alias of the commit).
    #[serde(rename = "latestChangeset")]
    #[serde(default)]
    pub latest_changeset: Option<String>,

    /// Hash of the annotated tag object itself, when one exists.
    #[serde(default)]
    pub hash: Option<String>,
}

/// Whether a created tag is a plain ref or an annotated tag object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagType {
    /// A plain ref pointing at a commit.
    #[serde(rename = "LIGHTWEIGHT")]
    Lightweight,
    /// A full tag object with its own message and hash.
    #[serde(rename = "ANNOTATED")]
    Annotated,
}

/// Request body for creating a tag.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTagRequest {
    /// Short name of the tag to create.
    pub name: String,

    /// Ref or commit the tag should point at.
    #[serde(rename = "startPoint")]
    pub start_point: String,

    /// Tag message; required for annotated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Move the tag if it already exists.
    pub force: bool,

    /// Lightweight or annotated.
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

/// One page of a file's contents from the `browse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContents {
    /// The lines of the file in this page.
    #[serde(default)]
    pub lines: Vec<FileLine>,

    /// Number of lines in this page.
    #[serde(default)]
    pub size: u32,

    /// Whether this page reaches the end of the file.
    #[serde(rename = "isLastPage")]
    #[serde(default)]
    pub is_last_page: bool,
}

/// A single line of file content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLine {
    /// The line text, without a trailing newline.
    pub text: String,
}

/// A repository hook and its current enablement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    /// Static description of the hook plugin.
    pub details: HookDetails,

    /// Whether the hook is currently enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Whether the hook has stored configuration.
    #[serde(default)]
    pub configured: bool,
}

/// Static description of a hook plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookDetails {
    /// Fully qualified plugin key identifying the hook.
    pub key: String,

    /// Human-readable hook name.
    #[serde(default)]
    pub name: Option<String>,

    /// Hook type, e.g. `PRE_RECEIVE` or `POST_RECEIVE`.
    #[serde(rename = "type")]
    #[serde(default)]
    pub hook_type: Option<String>,

    /// Description shown in the hook settings UI.
    #[serde(default)]
    pub description: Option<String>,

    /// Plugin version string.
    #[serde(default)]
    pub version: Option<String>,
}

/// Sub-client for the repository API area.
#[derive(Debug)]
pub struct Repositories {
    repos: Resource<Repository>,
    tags: Resource<Tag>,
    hooks: Resource<Hook>,
}

impl Repositories {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            repos: Resource::new(Arc::clone(&worker), REPOSITORIES, REPOSITORY),
            tags: Resource::new(Arc::clone(&worker), TAGS, GIT_TAG),
            hooks: Resource::new(worker, HOOKS, HOOK),
        }
    }

    fn worker(&self) -> &HttpClient {
        self.repos.worker()
    }

    /// Retrieves one page of a project's repositories.
    pub async fn list(
        &self,
        project_key: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Repository>> {
        self.repos.list(&[project_key], options).await
    }

    /// Retrieves a single repository by project key and slug.
    pub async fn get(&self, project_key: &str, repo_slug: &str) -> Result<Repository> {
        self.repos.get(&[project_key, repo_slug]).await
    }

    /// Creates a repository in a project, returning the server-echoed
    /// entity with its assigned `id` and `slug`.
    pub async fn create(
        &self,
        project_key: &str,
        repository: &CreateRepositoryRequest,
    ) -> Result<Repository> {
        self.repos.create(&[project_key], repository).await
    }

    /// Deletes a repository.
    pub async fn delete(&self, project_key: &str, repo_slug: &str) -> Result<()> {
        self.repos.delete(&[project_key, repo_slug]).await
    }

    /// Retrieves one page of the repository's tags.
    pub async fn tags(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Tag>> {
        self.tags.list(&[project_key, repo_slug], options).await
    }

    /// Creates a tag through the git plugin endpoint, returning the created
    /// tag.
    pub async fn create_tag(
        &self,
        project_key: &str,
        repo_slug: &str,
        tag: &CreateTagRequest,
    ) -> Result<Tag> {
        let url = self.worker().rest_url(GIT_TAGS, &[project_key, repo_slug])?;
        self.worker().post(url, tag).await
    }

    /// Deletes a tag by name.
    pub async fn delete_tag(&self, project_key: &str, repo_slug: &str, name: &str) -> Result<()> {
        self.tags.delete(&[project_key, repo_slug, name]).await
    }

    /// Retrieves one page of the repository's file paths.
    pub async fn files(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<String>> {
        let mut url = self.worker().rest_url(FILES, &[project_key, repo_slug])?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker().get(url).await
    }

    /// Retrieves a page of a file's contents.
    ///
    /// `path` is relative to the repository root and may span subfolders;
    /// each component is percent-encoded individually, so names with
    /// spaces work.
    pub async fn file_contents(
        &self,
        project_key: &str,
        repo_slug: &str,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<FileContents> {
        let mut url = self.worker().rest_url(BROWSE, &[project_key, repo_slug])?;
        push_file_path(&mut url, path)?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker().get(url).await
    }

    /// Retrieves one page of the repository's hooks.
    pub async fn hooks(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Hook>> {
        self.hooks.list(&[project_key, repo_slug], options).await
    }

    /// Retrieves a single hook by its plugin key.
    pub async fn hook(&self, project_key: &str, repo_slug: &str, hook_key: &str) -> Result<Hook> {
        self.hooks.get(&[project_key, repo_slug, hook_key]).await
    }

    /// Enables a hook, returning the updated hook with `enabled` set.
    pub async fn enable_hook(
        &self,
        project_key: &str,
        repo_slug: &str,
        hook_key: &str,
    ) -> Result<Hook> {
        let url = self
            .worker()
            .rest_url(HOOK_ENABLED, &[project_key, repo_slug, hook_key])?;
        self.worker().put_empty(url).await
    }

    /// Disables a hook, returning the updated hook with `enabled` cleared.
    pub async fn disable_hook(
        &self,
        project_key: &str,
        repo_slug: &str,
        hook_key: &str,
    ) -> Result<Hook> {
        let url = self
            .worker()
            .rest_url(HOOK_ENABLED, &[project_key, repo_slug, hook_key])?;
        self.worker().delete_expecting(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_round_trip_preserves_mapped_fields() {
        let json = r#"{
            "id": 42,
            "slug": "my-repo",
            "name": "My Repo",
            "scmId": "git",
            "state": "AVAILABLE",
            "statusMessage": "Available",
            "forkable": true,
            "public": false,
            "project": {"id": 7, "key": "PROJ", "name": "My Project", "public": false},
            "links": {"clone": [{"href": "ssh://git@bitbucket.example.com/proj/my-repo.git", "name": "ssh"}]}
        }"#;
        let repository: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repository.scm_id.as_deref(), Some("git"));
        assert_eq!(repository.project.as_ref().unwrap().key, "PROJ");

        let back = serde_json::to_value(&repository).unwrap();
        assert_eq!(back["scmId"], "git");
        assert_eq!(back["statusMessage"], "Available");
        assert_eq!(back["public"], false);

        let again: Repository = serde_json::from_value(back).unwrap();
        assert_eq!(again.slug, repository.slug);
        assert_eq!(again.scm_id, repository.scm_id);
    }

    #[test]
    fn test_create_tag_request_wire_shape() {
        let request = CreateTagRequest {
            name: "integration-test-tag".to_string(),
            start_point: "refs/heads/master".to_string(),
            message: Some("integration test tag".to_string()),
            force: true,
            tag_type: TagType::Annotated,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["startPoint"], "refs/heads/master");
        assert_eq!(json["type"], "ANNOTATED");
        assert_eq!(json["force"], true);
    }

    #[test]
    fn test_hook_round_trip() {
        let json = r#"{
            "details": {"key": "com.example:verify-hook", "name": "Verify", "type": "PRE_RECEIVE", "version": "1.2"},
            "enabled": true,
            "configured": true
        }"#;
        let hook: Hook = serde_json::from_str(json).unwrap();
        assert!(hook.enabled);
        assert_eq!(hook.details.hook_type.as_deref(), Some("PRE_RECEIVE"));

        let back = serde_json::to_value(&hook).unwrap();
        assert_eq!(back["details"]["type"], "PRE_RECEIVE");
    }

    #[test]
    fn test_file_contents_shape() {
        let json = r#"{"lines": [{"text": "fn main() {}"}], "size": 1, "isLastPage": true}"#;
        let contents: FileContents = serde_json::from_str(json).unwrap();
        assert_eq!(contents.lines.len(), 1);
        assert_eq!(contents.size, 1);
        assert!(contents.is_last_page);
    }
}
