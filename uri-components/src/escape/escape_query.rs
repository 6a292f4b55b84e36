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

use core::fmt::Write;
use std::borrow::Cow;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::str::from_utf8;

fn is_char_uri_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '~'
}

fn is_char_uri_sub_delim(c: char) -> bool {
    c == '!'
        || c == '$'
        || c == '&'
        || c == '\''
        || c == '('
        || c == ')'
        || c == '*'
        || c == '+'
        || c == ','
        || c == ';'
        || c == '='
}

fn is_char_uri_pchar(c: char) -> bool {
    is_char_uri_unreserved(c) || is_char_uri_sub_delim(c) || c == ':' || c == '@'
}

/// Characters that may appear unescaped inside a single query key or value.
fn is_char_query_item(c: char) -> bool {
    c != '&' && c != '=' && c != '+' && (is_char_uri_pchar(c) || c == '/' || c == '?')
}

fn byte_needs_escape(b: u8) -> bool {
    (b & 0x80) != 0 || !is_char_query_item(b as char)
}

fn hex_digit(nibble: u8) -> char {
    if nibble < 10 {
        (b'0' + nibble) as char
    } else {
        (b'A' + nibble - 10) as char
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(super) enum EscapeState {
    Normal,
    OutputHighNibble(u8),
    OutputLowNibble(u8),
}

/// An iterator used to percent-encode a query key or value.
///
/// It is constructed via the method [`escape_query_item()`].
/// See the documentation for [`StrExt`] for more information.
///
/// [`StrExt`]: trait.StrExt.html
/// [`escape_query_item()`]: trait.StrExt.html#tymethod.escape_query_item
#[derive(Debug, Clone)]
pub struct EscapeQuery<'a> {
    pub(super) iter: std::slice::Iter<'a, u8>,
    pub(super) state: EscapeState,
}

impl<'a> From<EscapeQuery<'a>> for Cow<'a, str> {
    fn from(iter: EscapeQuery<'a>) -> Self {
        iter.to_cow()
    }
}

impl<'a> EscapeQuery<'a> {
    /// Determines if this iterator will actually escape anything.
    pub fn is_needed(&self) -> bool {
        self.iter.clone().any(|b| *b == b' ' || byte_needs_escape(*b))
    }

    /// Converts this iterator into a [`std::borrow::Cow<str>`].
    pub fn to_cow(&self) -> Cow<'a, str> {
        if self.is_needed() {
            Cow::from(self.to_string())
        } else {
            // Nothing needs escaping, so every remaining byte is ASCII.
            Cow::from(from_utf8(self.iter.as_slice()).unwrap_or_default())
        }
    }
}

impl<'a> Display for EscapeQuery<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.clone().try_for_each(|c| f.write_char(c))
    }
}

impl<'a> FusedIterator for EscapeQuery<'a> {}

impl<'a> Iterator for EscapeQuery<'a> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match self.state {
            EscapeState::Normal => match self.iter.next().copied() {
                Some(b' ') => Some('+'),
                Some(b) if byte_needs_escape(b) => {
                    self.state = EscapeState::OutputHighNibble(b);
                    Some('%')
                }
                Some(b) => Some(b as char),
                None => None,
            },

            EscapeState::OutputHighNibble(b) => {
                self.state = EscapeState::OutputLowNibble(b);
                Some(hex_digit(b >> 4))
            }

            EscapeState::OutputLowNibble(b) => {
                self.state = EscapeState::Normal;
                Some(hex_digit(b & 0b1111))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.iter.size_hint().0;
        (n, Some(n * 3))
    }
}
