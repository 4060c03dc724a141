//
//  bitbucket-server-api
//  tests/api_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Integration tests driving the full client against a mock HTTP server.
//!
//! Each test stands up a mock endpoint, issues a call through the
//! top-level client, and checks both sides of the exchange: the request
//! the library produced (path, query, headers, body) and the typed value
//! it returned.

use anyhow::Result;
use mockito::{Matcher, Server, ServerGuard};

use bitbucket_server_api::api::branches::{BranchPermissionMatcherKind, DeleteBranchRequest};
use bitbucket_server_api::api::projects::{CreateProjectRequest, ProjectPermission};
use bitbucket_server_api::api::pull_requests::PullRequestState;
use bitbucket_server_api::api::repositories::CreateRepositoryRequest;
use bitbucket_server_api::{BitbucketClient, Error, RequestOptions};

fn client_for(server: &ServerGuard) -> BitbucketClient {
    BitbucketClient::new(&server.url(), "user", "pass").expect("client construction")
}

const PROJECT_PAGE: &str = r#"{
    "values": [{"id": 7, "key": "PROJ", "name": "My Project", "public": false, "type": "NORMAL", "links": {"self": []}}],
    "size": 1,
    "limit": 1,
    "isLastPage": false,
    "nextPageStart": 1,
    "start": 0
}"#;

#[tokio::test]
async fn test_list_projects_sends_paging_and_basic_auth() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/1.0/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        // base64("user:pass")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PROJECT_PAGE)
        .create_async()
        .await;

    let client = client_for(&server);
    let options = RequestOptions {
        start: Some(0),
        limit: Some(1),
    };
    let page = client.projects.list(Some(&options)).await?;

    mock.assert_async().await;
    assert_eq!(page.values.len(), 1);
    assert_eq!(page.values[0].key, "PROJ");
    assert!(page.has_next());
    assert_eq!(page.next_start(), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_list_projects_without_options_sends_no_paging_params() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/1.0/projects")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"{"values": [], "size": 0, "limit": 25, "isLastPage": true, "start": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.projects.list(None).await?;

    mock.assert_async().await;
    assert!(page.values.is_empty());
    assert!(!page.has_next());
    Ok(())
}

#[tokio::test]
async fn test_get_missing_project_is_api_error_with_status_404() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/1.0/projects/missing-id")
        .with_status(404)
        .with_body(r#"{"errors":[{"message":"Project missing-id does not exist."}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.projects.get("missing-id").await.unwrap_err();

    match error {
        Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("does not exist"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error_not_api_error() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/1.0/projects/PROJ")
        .with_status(200)
        .with_body(r#"{"unexpected": "shape"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.projects.get("PROJ").await.unwrap_err();

    assert!(matches!(error, Error::Decode { .. }));
    Ok(())
}

#[tokio::test]
async fn test_create_project_echoes_assigned_id() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/api/1.0/projects")
        .match_body(Matcher::Json(serde_json::json!({
            "key": "ZTEST",
            "name": "Project of Integration tests",
            "description": "Please delete!"
        })))
        .with_status(201)
        .with_body(
            r#"{"id": 99, "key": "ZTEST", "name": "Project of Integration tests",
                "description": "Please delete!", "public": false, "type": "NORMAL",
                "links": {"self": []}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .projects
        .create(&CreateProjectRequest {
            key: "ZTEST".to_string(),
            name: "Project of Integration tests".to_string(),
            description: Some("Please delete!".to_string()),
            is_public: None,
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(created.id, 99);
    assert_eq!(created.key, "ZTEST");
    Ok(())
}

#[tokio::test]
async fn test_delete_repository_sends_bodyless_delete() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/rest/api/1.0/projects/PROJ/repos/my-repo")
        .with_status(202)
        .create_async()
        .await;

    let client = client_for(&server);
    client.repositories.delete("PROJ", "my-repo").await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_create_repository_returns_server_slug() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/rest/api/1.0/projects/PROJ/repos")
        .match_body(Matcher::Json(serde_json::json!({"name": "Repository of Integration tests"})))
        .with_status(201)
        .with_body(
            r#"{"id": 55, "slug": "repository-of-integration-tests",
                "name": "Repository of Integration tests", "scmId": "git",
                "state": "AVAILABLE", "forkable": true, "public": false,
                "project": {"id": 7, "key": "PROJ", "name": "My Project", "public": false},
                "links": {"clone": []}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .repositories
        .create(
            "PROJ",
            &CreateRepositoryRequest {
                name: "Repository of Integration tests".to_string(),
                scm_id: None,
                forkable: None,
            },
        )
        .await?;

    assert_eq!(created.slug, "repository-of-integration-tests");
    assert_eq!(created.project.unwrap().key, "PROJ");
    Ok(())
}

#[tokio::test]
async fn test_commit_range_excludes_since_and_includes_until() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/1.0/projects/PROJ/repos/my-repo/commits")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("until".into(), "abc123".into()),
            Matcher::UrlEncoded("since".into(), "def456".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"values": [{"id": "abc123", "displayId": "abc123d",
                            "author": {"name": "J. Doe"}, "authorTimestamp": 1700000000000}],
                "size": 1, "limit": 25, "isLastPage": true, "start": 0}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let commits = client
        .commits
        .range("PROJ", "my-repo", "abc123", Some("def456"), None)
        .await?;

    mock.assert_async().await;
    assert!(commits.values.iter().any(|commit| commit.id == "abc123"));
    // range is exclusive of `since`
    assert!(!commits.values.iter().any(|commit| commit.id == "def456"));
    Ok(())
}

#[tokio::test]
async fn test_changes_to_hash_equals_until() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/1.0/projects/PROJ/repos/my-repo/changes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("until".into(), "abc123".into()),
            Matcher::UrlEncoded("since".into(), "def456".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"fromHash": "def456", "toHash": "abc123",
                "values": [{"contentId": "c0ffee",
                            "path": {"components": ["README.md"], "name": "README.md", "toString": "README.md"},
                            "type": "MODIFY", "nodeType": "FILE"}],
                "size": 1, "isLastPage": true, "start": 0, "limit": 1}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let options = RequestOptions {
        start: None,
        limit: Some(1),
    };
    let changes = client
        .commits
        .changes("PROJ", "my-repo", "abc123", Some("def456"), Some(&options))
        .await?;

    assert_eq!(changes.to_hash, "abc123");
    assert_eq!(changes.from_hash.as_deref(), Some("def456"));
    assert_eq!(changes.values.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_enable_then_disable_hook_reflects_state() -> Result<()> {
    let hook_path =
        "/rest/api/1.0/projects/PROJ/repos/my-repo/settings/hooks/com.example:verify-hook/enabled";
    let mut server = Server::new_async().await;
    let _enable_mock = server
        .mock("PUT", hook_path)
        .with_status(200)
        .with_body(r#"{"details": {"key": "com.example:verify-hook", "name": "Verify"}, "enabled": true, "configured": true}"#)
        .create_async()
        .await;
    let _disable_mock = server
        .mock("DELETE", hook_path)
        .with_status(200)
        .with_body(r#"{"details": {"key": "com.example:verify-hook", "name": "Verify"}, "enabled": false, "configured": true}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    let enabled = client
        .repositories
        .enable_hook("PROJ", "my-repo", "com.example:verify-hook")
        .await?;
    assert!(enabled.enabled);
    assert_eq!(enabled.details.key, "com.example:verify-hook");

    let disabled = client
        .repositories
        .disable_hook("PROJ", "my-repo", "com.example:verify-hook")
        .await?;
    assert!(!disabled.enabled);
    Ok(())
}

#[tokio::test]
async fn test_delete_branch_sends_identifier_in_body() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/rest/branch-utils/1.0/projects/PROJ/repos/my-repo/branches")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "test-branch",
            "dryRun": false
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .branches
        .delete(
            "PROJ",
            "my-repo",
            &DeleteBranchRequest {
                name: "test-branch".to_string(),
                dry_run: false,
            },
        )
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_branches_for_commit_lists_containing_branches() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock(
            "GET",
            "/rest/branch-utils/1.0/projects/PROJ/repos/my-repo/branches/info/abc123",
        )
        .with_status(200)
        .with_body(
            r#"{"values": [{"id": "refs/heads/master", "displayId": "master", "isDefault": true}],
                "size": 1, "limit": 25, "isLastPage": true, "start": 0}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let branches = client.branches.for_commit("PROJ", "my-repo", "abc123").await?;

    assert!(branches
        .values
        .iter()
        .any(|branch| branch.id == "refs/heads/master"));
    Ok(())
}

#[tokio::test]
async fn test_set_branch_permissions_returns_assigned_id() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock(
            "POST",
            "/rest/branch-permissions/2.0/projects/PROJ/repos/my-repo/restrictions",
        )
        .with_status(200)
        .with_body(
            r#"{"id": 17, "type": "read-only",
                "matcher": {"id": "master", "displayId": "master", "active": true,
                            "type": {"id": "BRANCH", "name": "Branch"}},
                "users": [], "groups": ["developers"]}"#,
        )
        .create_async()
        .await;
    let delete_mock = server
        .mock(
            "DELETE",
            "/rest/branch-permissions/2.0/projects/PROJ/repos/my-repo/restrictions/17",
        )
        .with_status(204)
        .create_async()
        .await;

    use bitbucket_server_api::api::branches::{
        BranchPermission, BranchPermissionMatcher, BranchPermissionMatcherType,
        BranchPermissionType,
    };

    let client = client_for(&server);
    let stored = client
        .branches
        .set_permissions(
            "PROJ",
            "my-repo",
            &BranchPermission {
                id: None,
                permission_type: BranchPermissionType::ReadOnly,
                matcher: BranchPermissionMatcher {
                    id: "master".to_string(),
                    display_id: "master".to_string(),
                    active: true,
                    matcher_type: BranchPermissionMatcherType {
                        id: BranchPermissionMatcherKind::Branch,
                        name: Some("Branch".to_string()),
                    },
                },
                users: Vec::new(),
                groups: vec!["developers".to_string()],
            },
        )
        .await?;

    assert_eq!(stored.id, Some(17));
    assert_eq!(stored.matcher.matcher_type.id, BranchPermissionMatcherKind::Branch);

    client.branches.delete_permissions("PROJ", "my-repo", 17).await?;
    delete_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_list_pull_requests_sends_state_filter() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/1.0/projects/PROJ/repos/my-repo/pull-requests")
        .match_query(Matcher::UrlEncoded("state".into(), "ALL".into()))
        .with_status(200)
        .with_body(
            r#"{"values": [{"id": 101, "version": 3, "title": "Add widget", "state": "MERGED",
                            "open": false, "closed": true,
                            "fromRef": {"id": "refs/heads/feature/widget"},
                            "toRef": {"id": "refs/heads/master"}}],
                "size": 1, "limit": 25, "isLastPage": true, "start": 0}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client
        .pull_requests
        .list("PROJ", "my-repo", Some(PullRequestState::All), None)
        .await?;

    mock.assert_async().await;
    assert_eq!(page.values[0].id, 101);
    assert_eq!(page.values[0].state.as_deref(), Some("MERGED"));
    Ok(())
}

#[tokio::test]
async fn test_file_contents_encodes_subfolders_with_spaces() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/rest/api/1.0/projects/PROJ/repos/my-repo/browse/sub%20folder/file.txt",
        )
        .with_status(200)
        .with_body(r#"{"lines": [{"text": "hello"}], "size": 1, "isLastPage": true}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let contents = client
        .repositories
        .file_contents("PROJ", "my-repo", "sub folder/file.txt", None)
        .await?;

    mock.assert_async().await;
    assert_eq!(contents.lines.len(), 1);
    assert_eq!(contents.size, 1);
    Ok(())
}

#[tokio::test]
async fn test_grant_user_sends_name_and_permission() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/rest/api/1.0/projects/PROJ/permissions/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "tmpTestUser".into()),
            Matcher::UrlEncoded("permission".into(), "PROJECT_ADMIN".into()),
        ]))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .projects
        .grant_user("PROJ", "tmpTestUser", ProjectPermission::ProjectAdmin)
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_delete_user_returns_deleted_user() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/rest/api/1.0/admin/users")
        .match_query(Matcher::UrlEncoded("name".into(), "tmpTestUser".into()))
        .with_status(200)
        .with_body(
            r#"{"name": "tmpTestUser", "displayName": "Temporary test user",
                "emailAddress": "tmpUser@company.com", "active": true, "type": "NORMAL"}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let deleted = client.users.delete("tmpTestUser").await?;

    assert_eq!(deleted.name, "tmpTestUser");
    assert_eq!(deleted.display_name.as_deref(), Some("Temporary test user"));
    Ok(())
}

#[tokio::test]
async fn test_create_user_sends_query_parameters() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/api/1.0/admin/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "tmpTestUser".into()),
            Matcher::UrlEncoded("displayName".into(), "Temporary test user".into()),
            Matcher::UrlEncoded("emailAddress".into(), "tmpUser@company.com".into()),
            Matcher::UrlEncoded("password".into(), "password".into()),
        ]))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .users
        .create("tmpTestUser", "Temporary test user", "tmpUser@company.com", "password")
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_do_not_cross_talk() -> Result<()> {
    let mut server = Server::new_async().await;
    let _alpha_mock = server
        .mock("GET", "/rest/api/1.0/projects/ALPHA")
        .with_status(200)
        .with_body(r#"{"id": 1, "key": "ALPHA", "name": "Alpha", "public": false, "links": {"self": []}}"#)
        .create_async()
        .await;
    let _beta_mock = server
        .mock("GET", "/rest/api/1.0/projects/BETA")
        .with_status(200)
        .with_body(r#"{"id": 2, "key": "BETA", "name": "Beta", "public": false, "links": {"self": []}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let (alpha, beta) = tokio::join!(client.projects.get("ALPHA"), client.projects.get("BETA"));

    let alpha = alpha?;
    let beta = beta?;
    assert_eq!(alpha.key, "ALPHA");
    assert_eq!(beta.key, "BETA");
    Ok(())
}

#[test]
fn test_forks_listing_blocking_harness() {
    // the library never spawns its own runtime; any executor drives it
    tokio_test::block_on(async {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/rest/api/1.0/projects/PROJ/repos/my-repo/forks")
            .with_status(200)
            .with_body(
                r#"{"values": [{"id": 9, "slug": "my-repo", "name": "My Repo",
                                "project": {"key": "~jdoe"}}],
                    "size": 1, "limit": 25, "isLastPage": true, "start": 0}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let forks = client.forks.list("PROJ", "my-repo", None).await.unwrap();
        assert_eq!(forks.values[0].project.as_ref().unwrap().key, "~jdoe");
    });
}
