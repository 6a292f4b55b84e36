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

//! # Query item percent encoding/decoding
//!
//! Query keys and values are encoded in the `application/x-www-form-urlencoded`
//! flavour: spaces become `+`, and anything that would change the structure of
//! the query (`&`, `=`, `+`, `#`, `%`) or is not ASCII is percent-encoded.
//!
//! The interface is the [`StrExt`] trait, which extends `str`:
//!
//! ```
//! use uri_components::escape::StrExt;
//!
//! let escaped = "a b&c=d".escape_query_item().to_string();
//! assert_eq!(&escaped, "a+b%26c%3Dd");
//!
//! let unescaped = escaped.unescape_query_item();
//! assert_eq!(&unescaped, "a b&c=d");
//! ```
//!
//! Decoding never fails. Bad escape sequences like `"%zz"` are passed through
//! literally, and escapes that decode to invalid UTF8 are replaced with
//! [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
//!
//! [U+FFFD]: core::char::REPLACEMENT_CHARACTER

mod escape_query;
pub use escape_query::*;

mod unescape_query;
use unescape_query::*;

use std::borrow::Cow;

/// Trait for `str` adding query item percent encoding/decoding.
///
/// See the [module-level](index.html) documentation for more details.
pub trait StrExt {
    /// Gets an iterator that percent-encodes this string for use as a query key or value.
    fn escape_query_item(&self) -> EscapeQuery<'_>;

    /// Decodes a query key or value, turning `+` into a space and resolving
    /// `%XX` escapes. Borrows when there is nothing to decode.
    fn unescape_query_item(&self) -> Cow<'_, str>;
}

impl StrExt for str {
    fn escape_query_item(&self) -> EscapeQuery<'_> {
        EscapeQuery {
            iter: self.as_bytes().iter(),
            state: EscapeState::Normal,
        }
    }

    fn unescape_query_item(&self) -> Cow<'_, str> {
        unescape_query(self)
    }
}

#[cfg(test)]
mod test;
