//
//  bitbucket-server-api
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Project API
//!
//! Projects are containers that group related repositories together and
//! provide shared access control. They are identified by a unique key (a
//! short uppercase identifier used in URLs); personal projects are prefixed
//! with `~`.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST   /rest/api/1.0/projects
//! GET/PUT/DELETE /rest/api/1.0/projects/{projectKey}
//! GET/PUT/DELETE /rest/api/1.0/projects/{projectKey}/permissions/users
//! GET/PUT/DELETE /rest/api/1.0/projects/{projectKey}/permissions/groups
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::groups::Group;
use crate::api::http::HttpClient;
use crate::api::resource::Resource;
use crate::api::users::User;

const PROJECTS: &str = "rest/api/1.0/projects";
const PROJECT: &str = "rest/api/1.0/projects/{}";
const USER_PERMISSIONS: &str = "rest/api/1.0/projects/{}/permissions/users";
const GROUP_PERMISSIONS: &str = "rest/api/1.0/projects/{}/permissions/groups";

/// Represents a project in Bitbucket Server/Data Center.
///
/// # Notes
///
/// - Personal projects have keys starting with `~` (e.g., `~jsmith`)
/// - The `project_type` distinguishes `NORMAL` and `PERSONAL` projects
/// - Project keys are case-insensitive but typically uppercase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique numeric identifier assigned by the server.
    pub id: u64,

    /// Short uppercase key used in URLs and API paths.
    /// Must be unique across the instance.
    pub key: String,

    /// Human-readable display name of the project.
    pub name: String,

    /// Optional description explaining the project's purpose.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the project is publicly accessible.
    #[serde(rename = "public")]
    #[serde(default)]
    pub is_public: bool,

    /// Type of the project: `NORMAL` or `PERSONAL`.
    #[serde(rename = "type")]
    #[serde(default)]
    pub project_type: Option<String>,

    /// Collection of links for accessing the project.
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Collection of links associated with a project.
///
/// The server returns links as arrays to maintain consistency with other
/// resource types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Self-referential links to the project in the web UI.
    #[serde(default, rename = "self")]
    pub self_link: Vec<SelfLink>,
}

/// Self-referential link to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfLink {
    /// The full URL to view this resource in the web UI.
    pub href: String,
}

/// Request body for creating a new project.
///
/// The `key` and `name` fields are required; the key cannot be changed
/// after creation. Optional fields are omitted from the JSON when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    /// Unique key for the new project (uppercase, no spaces).
    pub key: String,

    /// Human-readable name for the project.
    pub name: String,

    /// Optional description of the project's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the project should be publicly accessible.
    #[serde(rename = "public")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Request body for updating an existing project.
///
/// All fields are optional; only specified fields are updated. The project
/// key cannot be changed.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectRequest {
    /// New name for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description. `Some("")` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New public visibility setting.
    #[serde(rename = "public")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Project-level permission that can be granted to a user or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectPermission {
    /// Read access to every repository in the project.
    #[serde(rename = "PROJECT_READ")]
    ProjectRead,
    /// Write access to every repository in the project.
    #[serde(rename = "PROJECT_WRITE")]
    ProjectWrite,
    /// Administrative access to the project itself.
    #[serde(rename = "PROJECT_ADMIN")]
    ProjectAdmin,
}

impl ProjectPermission {
    /// The wire name of the permission, as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectRead => "PROJECT_READ",
            Self::ProjectWrite => "PROJECT_WRITE",
            Self::ProjectAdmin => "PROJECT_ADMIN",
        }
    }
}

/// One granted permission, as listed by the permission endpoints.
///
/// Exactly one of `user`/`group` is set, depending on which endpoint
/// produced the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    /// The user holding the permission, for user grants.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// The group holding the permission, for group grants.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,

    /// The granted permission.
    pub permission: ProjectPermission,
}

/// Sub-client for the project API area.
///
/// Stateless beyond the shared HTTP worker; one instance lives on the
/// top-level client for its whole lifetime.
#[derive(Debug)]
pub struct Projects {
    resource: Resource<Project>,
}

impl Projects {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            resource: Resource::new(worker, PROJECTS, PROJECT),
        }
    }

    /// Retrieves one page of projects visible to the authenticated user.
    ///
    /// `options` unset means server-default paging.
    pub async fn list(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Project>> {
        self.resource.list(&[], options).await
    }

    /// Retrieves a single project by its key.
    ///
    /// A missing project surfaces as [`Error::Api`](crate::Error::Api) with
    /// status 404.
    pub async fn get(&self, project_key: &str) -> Result<Project> {
        self.resource.get(&[project_key]).await
    }

    /// Creates a project, returning the server-echoed entity (with its
    /// assigned `id`).
    pub async fn create(&self, project: &CreateProjectRequest) -> Result<Project> {
        self.resource.create(&[], project).await
    }

    /// Updates a project's mutable properties.
    pub async fn update(&self, project_key: &str, update: &UpdateProjectRequest) -> Result<Project> {
        self.resource.update(&[project_key], update).await
    }

    /// Deletes a project.
    pub async fn delete(&self, project_key: &str) -> Result<()> {
        self.resource.delete(&[project_key]).await
    }

    /// Retrieves one page of the users holding permissions on the project.
    pub async fn user_permissions(
        &self,
        project_key: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Permission>> {
        let mut url = self.resource.worker().rest_url(USER_PERMISSIONS, &[project_key])?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.resource.worker().get(url).await
    }

    /// Retrieves one page of the groups holding permissions on the project.
    pub async fn group_permissions(
        &self,
        project_key: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Permission>> {
        let mut url = self.resource.worker().rest_url(GROUP_PERMISSIONS, &[project_key])?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.resource.worker().get(url).await
    }

    /// Grants `permission` on the project to a user.
    pub async fn grant_user(
        &self,
        project_key: &str,
        username: &str,
        permission: ProjectPermission,
    ) -> Result<()> {
        let mut url = self.resource.worker().rest_url(USER_PERMISSIONS, &[project_key])?;
        url.query_pairs_mut()
            .append_pair("name", username)
            .append_pair("permission", permission.as_str());
        self.resource.worker().put_unit(url).await
    }

    /// Revokes all project permissions from a user.
    pub async fn revoke_user(&self, project_key: &str, username: &str) -> Result<()> {
        let mut url = self.resource.worker().rest_url(USER_PERMISSIONS, &[project_key])?;
        url.query_pairs_mut().append_pair("name", username);
        self.resource.worker().delete(url).await
    }

    /// Grants `permission` on the project to a group.
    pub async fn grant_group(
        &self,
        project_key: &str,
        group: &str,
        permission: ProjectPermission,
    ) -> Result<()> {
        let mut url = self.resource.worker().rest_url(GROUP_PERMISSIONS, &[project_key])?;
        url.query_pairs_mut()
            .append_pair("name", group)
            .append_pair("permission", permission.as_str());
        self.resource.worker().put_unit(url).await
    }

    /// Revokes all project permissions from a group.
    pub async fn revoke_group(&self, project_key: &str, group: &str) -> Result<()> {
        let mut url = self.resource.worker().rest_url(GROUP_PERMISSIONS, &[project_key])?;
        url.query_pairs_mut().append_pair("name", group);
        self.resource.worker().delete(url).await
    }
}
