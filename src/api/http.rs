//
//  bitbucket-server-api
//  api/http.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Worker
//!
//! The single HTTP communication point for the library. Every sub-client
//! call funnels through [`HttpClient`], which:
//!
//! - attaches exactly one `Authorization` header per request (from the
//!   credential fixed at construction)
//! - performs one round trip per call, with no retry, caching, or
//!   library-imposed timeout
//! - maps non-2xx statuses to [`Error::Api`] carrying the status code and
//!   raw body
//! - decodes JSON bodies into the caller's type, surfacing mismatches as
//!   [`Error::Decode`]
//!
//! The worker holds no mutable state, so a single instance may be shared
//! behind an `Arc` and invoked concurrently from independent callers.

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::api::common::{Error, Result};
use crate::api::url::build_rest_url;
use crate::auth::AuthCredential;

/// Marker for requests that carry no JSON body.
const NO_BODY: Option<&()> = None;

/// HTTP worker wrapping a [`reqwest::Client`] with base URL and credentials.
///
/// Constructed once by the top-level client and shared by every sub-client.
/// Credentials and base URL are immutable for the worker's lifetime.
///
/// # Verb Methods
///
/// One method per request shape the wrapped API uses:
///
/// | Method | Verb | Request body | Response body |
/// |--------|------|--------------|---------------|
/// | [`get`](Self::get) | GET | - | JSON → `T` |
/// | [`post`](Self::post) | POST | JSON | JSON → `T` |
/// | [`post_empty`](Self::post_empty) | POST | - | JSON → `T` |
/// | [`post_unit`](Self::post_unit) | POST | - | ignored |
/// | [`put`](Self::put) | PUT | JSON | JSON → `T` |
/// | [`put_empty`](Self::put_empty) | PUT | - | JSON → `T` |
/// | [`put_unit`](Self::put_unit) | PUT | - | ignored |
/// | [`delete`](Self::delete) | DELETE | - | ignored |
/// | [`delete_with_body`](Self::delete_with_body) | DELETE | JSON | ignored |
/// | [`delete_expecting`](Self::delete_expecting) | DELETE | - | JSON → `T` |
#[derive(Debug)]
pub struct HttpClient {
    /// The underlying HTTP client.
    http: Client,
    /// The instance base URL, e.g. `https://bitbucket.example.com`.
    base_url: Url,
    /// Credentials applied to every request.
    auth: AuthCredential,
}

impl HttpClient {
    /// Creates a worker for the instance at `base_url` using `auth`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `base_url` does not parse as an
    /// absolute URL, or [`Error::Network`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, auth: AuthCredential) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            Error::InvalidArgument(format!("invalid base URL `{base_url}`: {error}"))
        })?;

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("bitbucket-server-api/{}", crate::VERSION))
                .build()?,
            base_url,
            auth,
        })
    }

    /// Returns the instance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an absolute request URL from a path template and segments.
    ///
    /// See [`crate::api::url`] for template syntax. Fails with
    /// [`Error::InvalidArgument`] before any request is sent.
    pub(crate) fn rest_url(&self, template: &str, segments: &[&str]) -> Result<Url> {
        build_rest_url(&self.base_url, template, segments)
    }

    /// Makes a GET request and decodes the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(Method::GET, url, NO_BODY).await?;
        Self::decode(response).await
    }

    /// Makes a POST request with a JSON body and decodes the response into `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, url: Url, body: &B) -> Result<T> {
        let response = self.execute(Method::POST, url, Some(body)).await?;
        Self::decode(response).await
    }

    /// Makes a bodyless POST request and decodes the response into `T`.
    ///
    /// Used for endpoints that take their input as query parameters but
    /// still echo an entity back.
    pub async fn post_empty<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(Method::POST, url, NO_BODY).await?;
        Self::decode(response).await
    }

    /// Makes a bodyless POST request, ignoring any response body.
    ///
    /// A 2xx status with an empty or non-JSON body succeeds without any
    /// decode attempt.
    pub async fn post_unit(&self, url: Url) -> Result<()> {
        self.execute(Method::POST, url, NO_BODY).await?;
        Ok(())
    }

    /// Makes a PUT request with a JSON body and decodes the response into `T`.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, url: Url, body: &B) -> Result<T> {
        let response = self.execute(Method::PUT, url, Some(body)).await?;
        Self::decode(response).await
    }

    /// Makes a bodyless PUT request and decodes the response into `T`.
    pub async fn put_empty<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(Method::PUT, url, NO_BODY).await?;
        Self::decode(response).await
    }

    /// Makes a bodyless PUT request, ignoring any response body.
    pub async fn put_unit(&self, url: Url) -> Result<()> {
        self.execute(Method::PUT, url, NO_BODY).await?;
        Ok(())
    }

    /// Makes a DELETE request, ignoring any response body.
    pub async fn delete(&self, url: Url) -> Result<()> {
        self.execute(Method::DELETE, url, NO_BODY).await?;
        Ok(())
    }

    /// Makes a DELETE request with a JSON body, ignoring any response body.
    ///
    /// The wrapped API deletes branches this way: the branch identifier
    /// travels in the request body rather than the path.
    pub async fn delete_with_body<B: Serialize>(&self, url: Url, body: &B) -> Result<()> {
        self.execute(Method::DELETE, url, Some(body)).await?;
        Ok(())
    }

    /// Makes a DELETE request and decodes the JSON response into `T`.
    ///
    /// Some admin endpoints echo the deleted entity back.
    pub async fn delete_expecting<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(Method::DELETE, url, NO_BODY).await?;
        Self::decode(response).await
    }

    /// Performs one authenticated round trip and checks the status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the request never completes, or
    /// [`Error::Api`] with the status code and raw body on a non-2xx
    /// response. Neither is retried.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.auth.apply_to_request(request);

        debug!(%method, %url, "sending bitbucket api request");
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, %url, "bitbucket api response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(response)
    }

    /// Decodes a successful response body into `T`.
    ///
    /// Reads the body as text first so a shape mismatch can be reported as
    /// [`Error::Decode`] alongside the offending payload, distinct from
    /// transport errors.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { source, body })
    }
}
