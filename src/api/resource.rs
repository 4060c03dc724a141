//
//  bitbucket-server-api
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Generic Resource Client
//!
//! One implementation of the build-URL / send / decode cycle, configured per
//! API area instead of hand-written per resource. A [`Resource`] pairs the
//! shared HTTP worker with two path templates: one for the collection
//! (list/create) and one for a single item (get/update/delete).
//!
//! Sub-clients configure a `Resource` per entity type and add their bespoke
//! operations (hook toggles, permission grants, range queries) on top via
//! the worker directly.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{PaginatedResponse, RequestOptions, Result};
use crate::api::http::HttpClient;

/// A resource area of the API, parameterized by entity type.
///
/// `collection` addresses the listing/creation endpoint; `item` addresses a
/// single entity and takes one more path segment than `collection` (the
/// identifier). Both are positional `{}` templates as understood by the URL
/// builder.
#[derive(Debug)]
pub(crate) struct Resource<T> {
    worker: Arc<HttpClient>,
    collection: &'static str,
    item: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Resource<T> {
    pub(crate) fn new(
        worker: Arc<HttpClient>,
        collection: &'static str,
        item: &'static str,
    ) -> Self {
        Self {
            worker,
            collection,
            item,
            _entity: PhantomData,
        }
    }

    /// URL of the collection endpoint for `segments`.
    pub(crate) fn collection_url(&self, segments: &[&str]) -> Result<Url> {
        self.worker.rest_url(self.collection, segments)
    }

    /// URL of a single item endpoint for `segments`.
    pub(crate) fn item_url(&self, segments: &[&str]) -> Result<Url> {
        self.worker.rest_url(self.item, segments)
    }

    /// Fetches one page of the collection.
    ///
    /// `options` unset means server-default paging.
    pub(crate) async fn list(
        &self,
        segments: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedResponse<T>> {
        let mut url = self.collection_url(segments)?;
        if let Some(options) = options {
            options.append_to(&mut url);
        }
        self.worker.get(url).await
    }

    /// Fetches a single entity by its path segments.
    pub(crate) async fn get(&self, segments: &[&str]) -> Result<T> {
        self.worker.get(self.item_url(segments)?).await
    }

    /// Creates an entity, returning the server-echoed result.
    pub(crate) async fn create<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<T> {
        self.worker.post(self.collection_url(segments)?, body).await
    }

    /// Replaces an entity, returning the server-echoed result.
    pub(crate) async fn update<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<T> {
        self.worker.put(self.item_url(segments)?, body).await
    }

    /// Deletes an entity. No response body is expected.
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        self.worker.delete(self.item_url(segments)?).await
    }

    /// The shared HTTP worker, for bespoke operations next to the CRUD set.
    pub(crate) fn worker(&self) -> &HttpClient {
        &self.worker
    }
}
