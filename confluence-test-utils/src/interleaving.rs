// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Checks over merged output. Source messages are assumed to be distinct.

use confluence_core::Message;

/// True when `merged` contains every message of every source exactly once,
/// with each source's messages in their original order.
#[must_use]
pub fn is_interleaving_of(merged: &[Message], sources: &[&[&str]]) -> bool {
    let mut cursors = vec![0_usize; sources.len()];

    for message in merged {
        let owner = sources
            .iter()
            .zip(cursors.iter())
            .position(|(source, &cursor)| source.get(cursor).is_some_and(|m| message == m));

        match owner {
            Some(index) => cursors[index] += 1,
            None => return false,
        }
    }

    cursors
        .iter()
        .zip(sources.iter())
        .all(|(&cursor, source)| cursor == source.len())
}

/// The messages of `merged` starting with `prefix`, in merged order.
#[must_use]
pub fn from_source<'a>(merged: &'a [Message], prefix: &str) -> Vec<&'a str> {
    merged
        .iter()
        .map(Message::as_str)
        .filter(|text| text.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    #[test]
    fn missing_message_is_not_an_interleaving() {
        let merged = messages(&["a1", "b1"]);
        assert!(!is_interleaving_of(&merged, &[&["a1", "a2"], &["b1"]]));
    }

    #[test]
    fn duplicated_message_is_not_an_interleaving() {
        let merged = messages(&["a1", "a1", "b1"]);
        assert!(!is_interleaving_of(&merged, &[&["a1"], &["b1"]]));
    }

    #[test]
    fn filters_by_prefix() {
        let merged = messages(&["a1", "b1", "a2"]);
        assert_eq!(from_source(&merged, "a"), vec!["a1", "a2"]);
    }
}
