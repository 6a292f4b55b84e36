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

use std::borrow::Cow;

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes a single query key or value.
///
/// `+` decodes to a space. `%` followed by two hex digits decodes to that
/// byte; any other `%` is kept as-is. The decoded bytes are then read as
/// UTF8, lossily.
pub(super) fn unescape_query(item: &str) -> Cow<'_, str> {
    if !item.contains(|c| c == '%' || c == '+') {
        return Cow::from(item);
    }

    let bytes = item.as_bytes();
    let mut buffer = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => buffer.push(b' '),
            b'%' => match (
                bytes.get(i + 1).copied().and_then(hex_value),
                bytes.get(i + 2).copied().and_then(hex_value),
            ) {
                (Some(msn), Some(lsn)) => {
                    buffer.push((msn << 4) | lsn);
                    i += 2;
                }
                _ => buffer.push(b'%'),
            },
            b => buffer.push(b),
        }
        i += 1;
    }

    match String::from_utf8(buffer) {
        Ok(s) => Cow::from(s),
        Err(e) => Cow::from(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}
