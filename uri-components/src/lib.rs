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

//! # Mutable URI Components
//!
//! This crate splits a URI string into its parts (scheme, user, password, host,
//! port, path, query, and fragment), lets each part be changed on its own, and
//! renders any subset of them back into a string.
//!
//! ## Important Types
//!
//! [`UriComponents`] holds the parsed parts. Parsing follows the generic
//! [IETF-RFC3986] grammar from Appendix B and never fails: whatever doesn't
//! match is left unset. The query is kept as a [`QueryMap`], so individual
//! parameters can be read and changed without touching the rest of the URI.
//!
//! Rendering is driven by [`RenderGroup`]s. Each group knows its own separators,
//! and the three views build on fixed sequences of groups:
//!
//! * [`UriComponents::full`]: the complete URI.
//! * [`UriComponents::host_uri`]: scheme and authority only.
//! * [`UriComponents::local`]: path, query, and fragment, for same-origin links.
//!
//! ```
//! use uri_components::UriComponents;
//!
//! let uri = UriComponents::parse("https://example.com");
//! assert_eq!(uri.full(), "https://example.com/");
//!
//! let uri = UriComponents::parse("https://a.b/x?y=1#z");
//! assert_eq!(uri.local(), "/x?y=1#z");
//! ```
//!
//! [`RequestUriFactory`] builds application links by joining a configured base
//! path (or static asset path) with a relative path, taking the scheme and host
//! for absolute links from the current [`Request`].
//!
//! ## What This Crate Doesn't Do
//!
//! Input is not validated, and no percent-encoding normalization is performed
//! outside of query keys and values. IPv6 literals, internationalized domain
//! names, and resolving relative references against a base are out of scope.
//!
//! [IETF-RFC3986]: https://tools.ietf.org/html/rfc3986
//!

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod escape;
use escape::*;

mod query;
pub use query::QueryMap;

mod render;
pub use render::RenderGroup;

mod components;
pub use components::UriComponents;

mod request;
pub use request::{
    FullUriOptions, Request, RequestUriFactory, StaticRequest, UriConfig,
    URL_GENERATOR_REPLACEMENT,
};

mod error;
pub use error::UriError;

mod regexes;
pub(crate) use regexes::*;


#[doc(hidden)]
pub mod prelude {
    pub use super::escape::StrExt;
    pub use super::{FullUriOptions, QueryMap, RenderGroup, Request, RequestUriFactory};
    pub use super::{StaticRequest, UriComponents, UriConfig, UriError};
}
