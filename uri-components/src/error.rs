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

use std::fmt;

/// Error type for [`RequestUriFactory`].
///
/// [`RequestUriFactory`]: crate::RequestUriFactory
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum UriError {
    /// The requested feature lives in a separate package. `replacement`
    /// names what to use instead. Retrying will not help.
    NotImplemented {
        /// The package and type that provide the feature.
        replacement: &'static str,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { replacement } => write!(
                f,
                "URL generator not implemented here, use {} instead",
                replacement
            ),
        }
    }
}

impl ::std::error::Error for UriError {}
