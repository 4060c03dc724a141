//
//  bitbucket-server-api
//  api/forks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Fork API
//!
//! Lists the forks of a repository. A fork is a repository that carries a
//! reference back to its origin.
//!
//! ## API Endpoints
//!
//! ```text
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/forks
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;
use crate::api::repositories::{ProjectRef, Repository, RepositoryLinks};
use crate::api::resource::Resource;

const FORKS: &str = "rest/api/1.0/projects/{}/repos/{}/forks";

/// A fork of a repository.
///
/// Shaped like a repository, plus an `origin` pointing back at the
/// repository it was forked from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fork {
    /// Unique numeric identifier assigned by the server.
    pub id: u64,

    /// URL-safe identifier of the fork.
    pub slug: String,

    /// Human-readable display name of the fork.
    pub name: String,

    /// The project (often a personal one) holding the fork.
    #[serde(default)]
    pub project: Option<ProjectRef>,

    /// Current state of the fork.
    #[serde(default)]
    pub state: Option<String>,

    /// The repository this fork was created from.
    #[serde(default)]
    pub origin: Option<Box<Repository>>,

    /// Collection of links for accessing the fork.
    #[serde(default)]
    pub links: RepositoryLinks,
}

/// Sub-client for the fork API area.
#[derive(Debug)]
pub struct Forks {
    resource: Resource<Fork>,
}

impl Forks {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self {
            resource: Resource::new(worker, FORKS, FORKS),
        }
    }

    /// Retrieves one page of the repository's forks.
    pub async fn list(
        &self,
        project_key: &str,
        repo_slug: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Fork>> {
        self.resource.list(&[project_key, repo_slug], options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fork_carries_origin() {
        let json = r#"{
            "id": 9,
            "slug": "my-repo",
            "name": "My Repo",
            "project": {"key": "~jdoe"},
            "state": "AVAILABLE",
            "origin": {
                "id": 42,
                "slug": "my-repo",
                "name": "My Repo",
                "project": {"key": "PROJ"}
            }
        }"#;
        let fork: Fork = serde_json::from_str(json).unwrap();
        assert_eq!(fork.project.as_ref().unwrap().key, "~jdoe");
        assert_eq!(fork.origin.as_ref().unwrap().project.as_ref().unwrap().key, "PROJ");
    }
}
