//
//  bitbucket-server-api
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Top-Level Client
//!
//! [`BitbucketClient`] is the entry point of the library. It builds the HTTP
//! worker once from a base URL and credentials, then hands a shared
//! reference to every resource sub-client, exposed as public fields.
//!
//! The client holds no mutable state, so one instance can serve concurrent
//! calls from independent tasks for its whole lifetime.

use std::sync::Arc;

use url::Url;

use crate::api::branches::Branches;
use crate::api::commits::Commits;
use crate::api::common::Result;
use crate::api::forks::Forks;
use crate::api::groups::Groups;
use crate::api::http::HttpClient;
use crate::api::projects::Projects;
use crate::api::pull_requests::PullRequests;
use crate::api::repositories::Repositories;
use crate::api::users::Users;
use crate::auth::AuthCredential;

/// Client for a Bitbucket Server/Data Center instance.
///
/// Construct it once with the instance base URL and credentials; every API
/// area is then available as a field.
///
/// # Example
///
/// ```rust,no_run
/// use bitbucket_server_api::BitbucketClient;
///
/// # async fn example() -> bitbucket_server_api::Result<()> {
/// let client = BitbucketClient::new("https://bitbucket.example.com", "jdoe", "secret")?;
///
/// let project = client.projects.get("PROJ").await?;
/// let repos = client.repositories.list(&project.key, None).await?;
/// println!("{} has {} repositories on this page", project.name, repos.values.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BitbucketClient {
    /// The shared HTTP worker.
    worker: Arc<HttpClient>,

    /// Project operations.
    pub projects: Projects,

    /// Repository, tag, file, and hook operations.
    pub repositories: Repositories,

    /// Branch and branch-permission operations.
    pub branches: Branches,

    /// Commit and change-range operations.
    pub commits: Commits,

    /// Pull request operations.
    pub pull_requests: PullRequests,

    /// Fork listing.
    pub forks: Forks,

    /// User administration.
    pub users: Users,

    /// Group administration.
    pub groups: Groups,
}

impl BitbucketClient {
    /// Creates a client authenticating with a username and password.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `base_url` does not parse as an absolute URL.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_credential(base_url, AuthCredential::basic(username, password))
    }

    /// Creates a client authenticating with a pre-encoded
    /// `base64(username:password)` value.
    pub fn with_base64(base_url: &str, base64_auth: &str) -> Result<Self> {
        Self::with_credential(base_url, AuthCredential::encoded_basic(base64_auth))
    }

    /// Creates a client authenticating with a bearer token (personal access
    /// token).
    pub fn with_bearer(base_url: &str, token: &str) -> Result<Self> {
        Self::with_credential(base_url, AuthCredential::bearer(token))
    }

    /// Creates a client from an explicit credential.
    ///
    /// The worker is constructed exactly once; every sub-client shares it.
    pub fn with_credential(base_url: &str, auth: AuthCredential) -> Result<Self> {
        let worker = Arc::new(HttpClient::new(base_url, auth)?);
        Ok(Self {
            projects: Projects::new(Arc::clone(&worker)),
            repositories: Repositories::new(Arc::clone(&worker)),
            branches: Branches::new(Arc::clone(&worker)),
            commits: Commits::new(Arc::clone(&worker)),
            pull_requests: PullRequests::new(Arc::clone(&worker)),
            forks: Forks::new(Arc::clone(&worker)),
            users: Users::new(Arc::clone(&worker)),
            groups: Groups::new(Arc::clone(&worker)),
            worker,
        })
    }

    /// Returns the instance base URL.
    pub fn base_url(&self) -> &Url {
        self.worker.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Error;

    #[test]
    fn test_invalid_base_url_is_rejected_before_any_request() {
        let error = BitbucketClient::new("not a url", "user", "pass").unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_base_url_is_preserved() {
        let client = BitbucketClient::new("https://bitbucket.example.com", "user", "pass").unwrap();
        assert_eq!(client.base_url().as_str(), "https://bitbucket.example.com/");
    }
}
