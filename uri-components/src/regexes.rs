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

use regex::Regex;
lazy_static! {
    /// Splits a URI-reference into "scheme", "authority", "path", "query", and "fragment".
    ///
    /// * scheme    = $2
    /// * authority = $4
    /// * path      = $5
    /// * query     = $7
    /// * fragment  = $9
    ///
    /// Every group is optional, so this matches any input, including input
    /// containing line breaks.
    pub(crate) static ref RFC3986_APPENDIX_B: Regex = Regex::new(r#"(?s)^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?$"#)
        .expect("RFC3986_APPENDIX_B");

    /// Splits the authority into "userinfo", "host", and "port".
    ///
    /// * userinfo = $2
    /// * host     = $3
    /// * port     = $5
    ///
    /// The userinfo extends to the last `@`. The port is only split off when it
    /// is all digits; anything else after a `:` stays part of the host.
    pub(crate) static ref URI_AUTHORITY: Regex = Regex::new(r#"(?s)^((.*)@)?([^@]*?)(:([0-9]*))?$"#)
        .expect("URI_AUTHORITY");
}
