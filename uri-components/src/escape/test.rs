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

#[test]
fn escape_passes_plain_text() {
    let escaped = "abc-123_.~".escape_query_item();
    assert!(!escaped.is_needed());
    assert!(matches!(escaped.to_cow(), Cow::Borrowed("abc-123_.~")));
}

#[test]
fn escape_structural_chars() {
    assert_eq!("a=b&c".escape_query_item().to_string(), "a%3Db%26c");
    assert_eq!("1+1".escape_query_item().to_string(), "1%2B1");
    assert_eq!("#top".escape_query_item().to_string(), "%23top");
    assert_eq!("100%".escape_query_item().to_string(), "100%25");
}

#[test]
fn escape_into_cow() {
    assert!(matches!(Cow::from("plain".escape_query_item()), Cow::Borrowed("plain")));
    assert_eq!(Cow::from("a&b".escape_query_item()), "a%26b");
}

#[test]
fn escape_space_as_plus() {
    assert_eq!("hello world".escape_query_item().to_string(), "hello+world");
}

#[test]
fn escape_keeps_slash_and_question_mark() {
    assert_eq!("/a/b?c".escape_query_item().to_string(), "/a/b?c");
}

#[test]
fn escape_non_ascii() {
    assert_eq!("blåbær".escape_query_item().to_string(), "bl%C3%A5b%C3%A6r");
    assert_eq!("\u{9}".escape_query_item().to_string(), "%09");
}

#[test]
fn unescape_borrows_when_possible() {
    assert!(matches!("plain".unescape_query_item(), Cow::Borrowed("plain")));
}

#[test]
fn unescape_plus_and_percent() {
    assert_eq!("hello+world".unescape_query_item(), "hello world");
    assert_eq!("a%3Db%26c".unescape_query_item(), "a=b&c");
    assert_eq!("bl%C3%A5b%C3%A6r".unescape_query_item(), "blåbær");
    assert_eq!("%2b".unescape_query_item(), "+");
}

#[test]
fn unescape_bad_sequences_are_literal() {
    assert_eq!("100%".unescape_query_item(), "100%");
    assert_eq!("%zz".unescape_query_item(), "%zz");
    assert_eq!("%4".unescape_query_item(), "%4");
}

#[test]
fn unescape_invalid_utf8_is_replaced() {
    assert_eq!("%E2%82".unescape_query_item(), "\u{FFFD}");
}

#[test]
fn escape_then_unescape() {
    let original = "x = y & z + 100% #1";
    let escaped = original.escape_query_item().to_string();
    assert_eq!(escaped.unescape_query_item(), original);
}
