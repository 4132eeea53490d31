//! Chord token extraction for chord lines.

use std::sync::LazyLock;

use regex::Regex;

use super::classify::{classify_line, is_valid_chord};
use crate::types::{ChordToken, LineKind};

/// A chord shape: root, accidental, quality, extension, slash bass.
#[allow(clippy::expect_used)]
static RE_CHORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-G][#b]?(?:maj|min|dim|aug|sus|add|m|M)?\d{0,2}(?:(?:sus|add)\d{0,2})?(?:/[A-G][#b]?)?")
        .expect("valid regex: RE_CHORD_SHAPE")
});

/// Find the chords to highlight in a raw chord line.
///
/// Offsets refer to the untrimmed line, so callers can rebuild it with its
/// spacing intact. A match touching a letter, digit or underscore on either
/// side is part of a longer word and is skipped.
pub fn find_chord_tokens(line: &str) -> Vec<ChordToken> {
    RE_CHORD_SHAPE
        .find_iter(line)
        .filter(|m| {
            let before = line[..m.start()].chars().next_back();
            let after = line[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .filter(|m| is_valid_chord(m.as_str()))
        .map(|m| ChordToken {
            text: m.as_str().to_string(),
            start: m.start(),
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Distinct chords across all chord lines of a sheet, in order of first appearance.
pub fn chords_used(text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if classify_line(line) != LineKind::ChordLine {
            continue;
        }
        for token in find_chord_tokens(line) {
            if !seen.contains(&token.text) {
                seen.push(token.text);
            }
        }
    }

    seen
}
