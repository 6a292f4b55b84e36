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

use super::*;

use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

/// An insertion-ordered mapping of query keys to values.
///
/// Keys are unique. Inserting a key that is already present replaces its value
/// but keeps its original position, so repeated keys in a parsed query string
/// resolve to the *last* value given ("last wins").
///
/// Equality ignores ordering: two maps are equal if they hold the same
/// key/value pairs.
///
/// ```
/// use uri_components::QueryMap;
///
/// let query = QueryMap::parse("b=2&a=1&b=3");
/// assert_eq!(query.get("b"), Some("3"));
/// assert_eq!(query.to_string(), "b=3&a=1");
/// ```
#[derive(Debug, Clone, Default, Eq)]
pub struct QueryMap {
    items: Vec<(String, String)>,
}

impl QueryMap {
    /// Creates an empty `QueryMap`.
    pub fn new() -> QueryMap {
        QueryMap { items: Vec::new() }
    }

    /// Parses a query string (without the leading `?`).
    ///
    /// Items are separated by `&` and split at their first `=`; an item
    /// without `=` gets an empty value. Keys and values are percent-decoded,
    /// with `+` decoding to a space. Empty items and items whose key decodes
    /// to an empty string are skipped.
    pub fn parse(query: &str) -> QueryMap {
        let mut ret = QueryMap::new();

        for item in query.split('&').filter(|item| !item.is_empty()) {
            let (key, value) = match item.find('=') {
                Some(i) => (&item[..i], &item[i + 1..]),
                None => (item, ""),
            };

            let key = key.unescape_query_item();
            if key.is_empty() {
                trace!("Skipping query item with empty key: {:?}", item);
                continue;
            }

            ret.insert(key, value.unescape_query_item());
        }

        ret
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.items[i].1.as_str())
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.items[i].1, value)),
            None => {
                self.items.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.items.remove(i).1)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the key/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(k, _)| k.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }
}

impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

/// Renders the query string, without the leading `?`.
impl Display for QueryMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key.escape_query_item(), value.escape_query_item())?;
        }
        Ok(())
    }
}

impl From<&str> for QueryMap {
    fn from(query: &str) -> Self {
        QueryMap::parse(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ret = QueryMap::new();
        ret.extend(iter);
        ret
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
