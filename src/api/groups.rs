//
//  bitbucket-server-api
//  api/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Group Administration API
//!
//! Group lookup and lifecycle through the admin endpoint. Like user
//! administration, creation and deletion take the group name as a query
//! parameter.
//!
//! ## API Endpoints
//!
//! ```text
//! GET         /rest/api/1.0/admin/groups
//! POST/DELETE /rest/api/1.0/admin/groups
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;

const ADMIN_GROUPS: &str = "rest/api/1.0/admin/groups";

/// Represents a user group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group name; the only identifier a group has.
    pub name: String,

    /// Whether the authenticated admin may delete the group.
    #[serde(default)]
    pub deletable: bool,
}

/// Sub-client for the group administration API area.
///
/// Every operation here requires admin permission on the instance.
#[derive(Debug)]
pub struct Groups {
    worker: Arc<HttpClient>,
}

impl Groups {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self { worker }
    }

    /// Retrieves one page of groups, optionally filtered by name fragment.
    pub async fn list(
        &self,
        filter: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<Group>> {
        let mut url = self.worker.rest_url(ADMIN_GROUPS, &[])?;
        if let Some(filter) = filter {
            url.query_pairs_mut().append_pair("filter", filter);
        }
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker.get(url).await
    }

    /// Creates a group, returning the created group.
    pub async fn create(&self, name: &str) -> Result<Group> {
        let mut url = self.worker.rest_url(ADMIN_GROUPS, &[])?;
        url.query_pairs_mut().append_pair("name", name);
        self.worker.post_empty(url).await
    }

    /// Deletes a group, returning the deleted group.
    pub async fn delete(&self, name: &str) -> Result<Group> {
        let mut url = self.worker.rest_url(ADMIN_GROUPS, &[])?;
        url.query_pairs_mut().append_pair("name", name);
        self.worker.delete_expecting(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserializes() {
        let json = r#"{"name": "developers", "deletable": true}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "developers");
        assert!(group.deletable);
    }
}
