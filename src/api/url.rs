//
//  bitbucket-server-api
//  api/url.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # URL Builder
//!
//! Pure construction of request URLs from a base URL, a path template, and
//! positional path segment values.
//!
//! Templates are slash-separated paths in which each `{}` component is a
//! placeholder, e.g. `rest/api/1.0/projects/{}/repos/{}/forks`. Placeholders
//! are filled in template order with the supplied segment values, which are
//! percent-encoded on the way in. The same inputs always produce the same
//! URL string.
//!
//! Supplying the wrong number of segment values is an
//! [`Error::InvalidArgument`] raised before any network I/O.

use url::Url;

use crate::api::common::{Error, Result};

/// Builds an absolute request URL from `base`, a path `template`, and
/// positional `segments`.
///
/// Each template component that is exactly `{}` is replaced, in order, by
/// the next segment value; every other component is used literally. Segment
/// values are percent-encoded, so keys and slugs containing spaces or other
/// reserved characters are safe to pass through.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the number of segment values does
/// not match the number of placeholders (in either direction), or when the
/// base URL cannot carry a path.
///
/// # Example
///
/// ```rust,ignore
/// let base = Url::parse("https://bitbucket.example.com")?;
/// let url = build_rest_url(&base, "rest/api/1.0/projects/{}/repos/{}", &["PROJ", "my-repo"])?;
/// assert_eq!(url.as_str(), "https://bitbucket.example.com/rest/api/1.0/projects/PROJ/repos/my-repo");
/// ```
pub(crate) fn build_rest_url(base: &Url, template: &str, segments: &[&str]) -> Result<Url> {
    let placeholders = template.split('/').filter(|part| *part == "{}").count();
    if placeholders != segments.len() {
        return Err(Error::InvalidArgument(format!(
            "path template `{template}` has {placeholders} placeholder(s) but {} segment value(s) were supplied",
            segments.len()
        )));
    }

    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidArgument(format!("base URL `{base}` cannot carry a path")))?;
        parts.pop_if_empty();

        let mut values = segments.iter();
        for component in template.split('/') {
            if component == "{}" {
                // counts were checked above, a value is always available
                parts.push(values.next().expect("segment count verified"));
            } else {
                parts.push(component);
            }
        }
    }
    Ok(url)
}

/// Appends each `/`-separated component of `path` to `url` as its own
/// segment.
///
/// Used for file paths under `browse`-style endpoints, where the path may
/// span subfolders: the separators must survive while each component is
/// still percent-encoded individually.
pub(crate) fn push_file_path(url: &mut Url, path: &str) -> Result<()> {
    let mut parts = url
        .path_segments_mut()
        .map_err(|_| Error::InvalidArgument("URL cannot carry a path".to_string()))?;
    parts.extend(path.split('/').filter(|component| !component.is_empty()));
    Ok(())
}
