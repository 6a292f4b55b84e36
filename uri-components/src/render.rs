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

/// One of the seven independently renderable parts of a [`UriComponents`].
///
/// Each group supplies its own separators, so any sequence of groups can be
/// concatenated without further punctuation.
///
/// [`UriComponents`]: crate::UriComponents
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum RenderGroup {
    /// `scheme://`, or nothing if there is no scheme.
    Scheme,

    /// `user:password@`, `user@`, or nothing if there is no user.
    ///
    /// A password without a user is never rendered.
    UserInfo,

    /// The bare host, or nothing.
    Host,

    /// `:port`, or nothing.
    Port,

    /// The path, or `/` if there is no path. This group always renders something.
    Path,

    /// `?query`, or nothing if the query mapping is empty.
    Query,

    /// `#fragment`, or nothing.
    Fragment,
}

impl RenderGroup {
    /// A complete URI: scheme, credentials, host, port, path, query, and fragment.
    pub const FULL: &'static [RenderGroup] = &[
        RenderGroup::Scheme,
        RenderGroup::UserInfo,
        RenderGroup::Host,
        RenderGroup::Port,
        RenderGroup::Path,
        RenderGroup::Query,
        RenderGroup::Fragment,
    ];

    /// Scheme and authority only.
    pub const HOST: &'static [RenderGroup] = &[
        RenderGroup::Scheme,
        RenderGroup::UserInfo,
        RenderGroup::Host,
        RenderGroup::Port,
    ];

    /// Path, query, and fragment; suitable for same-origin links.
    pub const LOCAL: &'static [RenderGroup] =
        &[RenderGroup::Path, RenderGroup::Query, RenderGroup::Fragment];
}
