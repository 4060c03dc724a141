//
//  bitbucket-server-api
//  api/common/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Request Option Value Objects
//!
//! Plain immutable structs describing per-call query parameters: paging
//! (`start`/`limit`) and, for commit listing, a `since`/`until` ref range.
//! A caller constructs one per call; unset fields simply do not appear in
//! the query string, leaving the server's defaults in effect.

use url::Url;

/// Paging options for list endpoints.
///
/// Both fields are optional; `None` means "server default". The same value
/// can be reused across calls — nothing in it is consumed.
///
/// # Example
///
/// ```rust
/// use bitbucket_server_api::RequestOptions;
///
/// let first_page = RequestOptions { start: Some(0), limit: Some(25) };
/// let default_paging = RequestOptions::default();
/// assert_eq!(default_paging.start, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// 0-indexed offset of the first result to return.
    pub start: Option<u32>,

    /// Maximum number of results per page.
    pub limit: Option<u32>,
}

impl RequestOptions {
    /// Appends the present fields to `url` as query parameters.
    ///
    /// Fields that are `None` are omitted entirely; a fully-unset options
    /// value leaves the URL untouched.
    pub fn append_to(&self, url: &mut Url) {
        if self.start.is_none() && self.limit.is_none() {
            return;
        }
        let mut pairs = url.query_pairs_mut();
        if let Some(start) = self.start {
            pairs.append_pair("start", &start.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
}

/// Paging plus commit-range options for commit listing.
///
/// Extends [`RequestOptions`] with a `since`/`until` ref pair scoping the
/// history query. The returned set is every commit reachable from `until`
/// but not from `since` — exclusive of `since`, inclusive of `until`.
///
/// # Example
///
/// ```rust
/// use bitbucket_server_api::CommitsOptions;
///
/// let options = CommitsOptions {
///     until: Some("refs/heads/master".to_string()),
///     since: Some("abc123".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(options.limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitsOptions {
    /// 0-indexed offset of the first result to return.
    pub start: Option<u32>,

    /// Maximum number of results per page.
    pub limit: Option<u32>,

    /// Ref or commit whose reachable history is excluded from the result.
    pub since: Option<String>,

    /// Ref or commit the history is read from (included in the result).
    pub until: Option<String>,
}

impl CommitsOptions {
    /// Appends the present fields to `url` as query parameters.
    pub fn append_to(&self, url: &mut Url) {
        if self.start.is_none()
            && self.limit.is_none()
            && self.since.is_none()
            && self.until.is_none()
        {
            return;
        }
        let mut pairs = url.query_pairs_mut();
        if let Some(start) = self.start {
            pairs.append_pair("start", &start.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(since) = &self.since {
            pairs.append_pair("since", since);
        }
        if let Some(until) = &self.until {
            pairs.append_pair("until", until);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://bitbucket.example.com/rest/api/1.0/projects").unwrap()
    }

    #[test]
    fn test_limit_appears_only_when_set() {
        let mut url = base();
        RequestOptions {
            start: None,
            limit: Some(25),
        }
        .append_to(&mut url);
        assert_eq!(url.query(), Some("limit=25"));

        let mut url = base();
        RequestOptions::default().append_to(&mut url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_start_and_limit_together() {
        let mut url = base();
        RequestOptions {
            start: Some(50),
            limit: Some(25),
        }
        .append_to(&mut url);
        assert_eq!(url.query(), Some("start=50&limit=25"));
    }

    #[test]
    fn test_commit_range_parameters() {
        let mut url = base();
        CommitsOptions {
            start: None,
            limit: Some(2),
            since: Some("def456".to_string()),
            until: Some("abc123".to_string()),
        }
        .append_to(&mut url);
        assert_eq!(url.query(), Some("limit=2&since=def456&until=abc123"));
    }

    #[test]
    fn test_unset_commit_options_leave_url_untouched() {
        let mut url = base();
        CommitsOptions::default().append_to(&mut url);
        assert_eq!(url.as_str(), base().as_str());
    }
}
