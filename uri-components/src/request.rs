// Copyright 2019 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Application-relative links built from the current request.

use super::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The package to use for named-route URL generation.
pub const URL_GENERATOR_REPLACEMENT: &str = "the `url-generator` package (`UrlBuilder`)";

/// Read-only view of the request being served.
pub trait Request {
    /// The scheme the request arrived on, like `"http"` or `"https"`.
    fn scheme(&self) -> &str;

    /// The value of the `Host` header, if the request has one.
    fn host_header(&self) -> Option<&str>;
}

impl<T: Request + ?Sized> Request for &T {
    fn scheme(&self) -> &str {
        (**self).scheme()
    }

    fn host_header(&self) -> Option<&str> {
        (**self).host_header()
    }
}

/// A [`Request`] with a fixed scheme and host.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StaticRequest {
    /// Returned by [`Request::scheme`].
    pub scheme: String,
    /// Returned by [`Request::host_header`].
    pub host: Option<String>,
}

impl StaticRequest {
    /// Creates a request with the given scheme and host header.
    pub fn new<S: Into<String>, H: Into<String>>(scheme: S, host: H) -> StaticRequest {
        StaticRequest {
            scheme: scheme.into(),
            host: Some(host.into()),
        }
    }
}

impl Request for StaticRequest {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host_header(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

/// Path prefixes used by [`RequestUriFactory`].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UriConfig {
    /// Prefix for application links. Defaults to `/`.
    pub base_path: String,
    /// Prefix for static asset links. Defaults to `/`.
    pub static_path: String,
}

impl Default for UriConfig {
    fn default() -> Self {
        UriConfig {
            base_path: "/".to_string(),
            static_path: "/".to_string(),
        }
    }
}

/// Optional parts of a link built by [`RequestUriFactory::full`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FullUriOptions {
    /// Query parameters to set on the link.
    pub query: QueryMap,
    /// Fragment, with or without a leading `#`.
    pub fragment: Option<String>,
    /// Scheme to use instead of the request's.
    pub scheme: Option<String>,
    /// Host to use instead of the request's `Host` header.
    pub host: Option<String>,
}

/// Builds links relative to a configured base path and static path,
/// using the current request for absolute links.
///
/// ```
/// use uri_components::{FullUriOptions, QueryMap, RequestUriFactory, StaticRequest, UriConfig};
///
/// let request = StaticRequest::new("https", "example.com");
/// let mut factory = RequestUriFactory::new(&request, UriConfig::default());
/// factory.set_base_path("/app/").set_static_path("/assets");
///
/// assert_eq!(factory.path("/users/", &QueryMap::new()), "/app/users/");
/// assert_eq!(factory.static_path("css/site.css"), "/assets/css/site.css");
/// assert_eq!(
///     factory.full("users", FullUriOptions::default()),
///     "https://example.com/app/users"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestUriFactory<R: Request> {
    request: R,
    config: UriConfig,
}

fn join(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl<R: Request> RequestUriFactory<R> {
    /// Creates a factory for `request` using the given path prefixes.
    pub fn new(request: R, config: UriConfig) -> RequestUriFactory<R> {
        RequestUriFactory { request, config }
    }

    /// The path prefixes in use.
    pub fn config(&self) -> &UriConfig {
        &self.config
    }

    /// The request links are built for.
    pub fn request(&self) -> &R {
        &self.request
    }

    /// The prefix for application links.
    pub fn base_path(&self) -> &str {
        &self.config.base_path
    }

    /// Sets the prefix for application links.
    pub fn set_base_path<S: Into<String>>(&mut self, base_path: S) -> &mut Self {
        self.config.base_path = base_path.into();
        self
    }

    /// The prefix for static asset links.
    pub fn static_path_prefix(&self) -> &str {
        &self.config.static_path
    }

    /// Sets the prefix for static asset links.
    pub fn set_static_path<S: Into<String>>(&mut self, static_path: S) -> &mut Self {
        self.config.static_path = static_path.into();
        self
    }

    /// Builds a same-origin link to `path` under the base path.
    pub fn path(&self, path: &str, query: &QueryMap) -> String {
        let mut uri = UriComponents::parse(&join(&self.config.base_path, path));
        uri.extend_query(query.iter());

        let ret = uri.local();
        debug!("path({:?}) -> {:?}", path, ret);
        ret
    }

    /// Builds a same-origin link to `path` under the static path.
    pub fn static_path(&self, path: &str) -> String {
        let ret = UriComponents::parse(&join(&self.config.static_path, path)).local();
        debug!("static_path({:?}) -> {:?}", path, ret);
        ret
    }

    /// Builds an absolute link to `path` under the base path.
    ///
    /// The scheme and host come from the request unless overridden in
    /// `options`. If neither gives a host, the link has no host.
    pub fn full(&self, path: &str, options: FullUriOptions) -> String {
        let FullUriOptions {
            query,
            fragment,
            scheme,
            host,
        } = options;

        let mut uri = UriComponents::parse(&join(&self.config.base_path, path));

        uri.set_scheme(scheme.unwrap_or_else(|| self.request.scheme().to_string()));

        match host.as_deref().or_else(|| self.request.host_header()) {
            Some(host) => uri.set_host(host),
            None => uri.clear_host(),
        };

        uri.extend_query(query);

        if let Some(fragment) = fragment {
            uri.set_fragment(fragment.trim_start_matches('#'));
        }

        let ret = uri.full();
        debug!("full({:?}) -> {:?}", path, ret);
        ret
    }

    /// Named-route URL generation is not provided by this crate.
    ///
    /// This always fails with [`UriError::NotImplemented`], naming the
    /// package that provides it.
    pub fn create(&self, route: &str) -> Result<String, UriError> {
        debug!("create({:?}) requested, but URL generation is unavailable", route);
        Err(UriError::NotImplemented {
            replacement: URL_GENERATOR_REPLACEMENT,
        })
    }
}
