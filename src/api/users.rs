//
//  bitbucket-server-api
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # User Administration API
//!
//! User lookup and lifecycle through the admin endpoint. Creation and
//! deletion take their input as query parameters — that is the wrapped
//! API's contract for this area, not a shortcut — and deletion echoes the
//! deleted user back.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST/DELETE /rest/api/1.0/admin/users
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;

const ADMIN_USERS: &str = "rest/api/1.0/admin/users";

/// Represents a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identifier, when the server includes it.
    #[serde(default)]
    pub id: Option<u64>,

    /// Login name.
    pub name: String,

    /// Display name shown in the UI.
    #[serde(rename = "displayName")]
    #[serde(default)]
    pub display_name: Option<String>,

    /// Email address.
    #[serde(rename = "emailAddress")]
    #[serde(default)]
    pub email_address: Option<String>,

    /// Whether the account is active.
    #[serde(default)]
    pub active: bool,

    /// URL-safe form of the login name.
    #[serde(default)]
    pub slug: Option<String>,

    /// Account type, e.g. `NORMAL` or `SERVICE`.
    #[serde(rename = "type")]
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Sub-client for the user administration API area.
///
/// Every operation here requires admin permission on the instance.
#[derive(Debug)]
pub struct Users {
    worker: Arc<HttpClient>,
}

impl Users {
    pub(crate) fn new(worker: Arc<HttpClient>) -> Self {
        Self { worker }
    }

    /// Retrieves one page of users, optionally filtered by name fragment.
    pub async fn list(
        &self,
        filter: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<User>> {
        let mut url = self.worker.rest_url(ADMIN_USERS, &[])?;
        if let Some(filter) = filter {
            url.query_pairs_mut().append_pair("filter", filter);
        }
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker.get(url).await
    }

    /// Creates a user account.
    ///
    /// The admin endpoint takes all fields as query parameters and answers
    /// with no body.
    pub async fn create(
        &self,
        name: &str,
        display_name: &str,
        email_address: &str,
        password: &str,
    ) -> Result<()> {
        let mut url = self.worker.rest_url(ADMIN_USERS, &[])?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("displayName", display_name)
            .append_pair("emailAddress", email_address)
            .append_pair("password", password);
        self.worker.post_unit(url).await
    }

    /// Deletes a user account, returning the deleted user.
    pub async fn delete(&self, name: &str) -> Result<User> {
        let mut url = self.worker.rest_url(ADMIN_USERS, &[])?;
        url.query_pairs_mut().append_pair("name", name);
        self.worker.delete_expecting(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip_preserves_mapped_fields() {
        let json = r#"{
            "id": 12,
            "name": "jdoe",
            "displayName": "J. Doe",
            "emailAddress": "jdoe@example.com",
            "active": true,
            "slug": "jdoe",
            "type": "NORMAL"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("J. Doe"));
        assert_eq!(user.user_type.as_deref(), Some("NORMAL"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["displayName"], "J. Doe");
        assert_eq!(back["emailAddress"], "jdoe@example.com");
        assert_eq!(back["type"], "NORMAL");

        let again: User = serde_json::from_value(back).unwrap();
        assert_eq!(again.name, user.name);
        assert_eq!(again.email_address, user.email_address);
    }
}
