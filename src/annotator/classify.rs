//! Line classification.
//!
//! Checks run in a fixed priority order: section header, empty, chord line,
//! and lyrics as the fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{chord, section};
use crate::types::LineKind;

/// Matches a whole line holding one section keyword, e.g. `[verse 2]` or `chorus:`.
/// Applied to the trimmed, lower-cased line.
#[allow(clippy::expect_used)]
static RE_SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = section::KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^\[?\s*(?:{keywords})(?:\s*\d+)?\s*\]?\s*:?$"))
        .expect("valid regex: RE_SECTION_HEADER")
});

/// Classify a raw line.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if is_section_header(trimmed) {
        LineKind::SectionHeader
    } else if trimmed.is_empty() {
        LineKind::Empty
    } else if is_chord_line(trimmed) {
        LineKind::ChordLine
    } else {
        LineKind::LyricsLine
    }
}

/// Returns true if the line is a standalone section label.
///
/// A keyword inside a sentence ("the chorus goes") does not count.
pub fn is_section_header(line: &str) -> bool {
    RE_SECTION_HEADER.is_match(&line.trim().to_lowercase())
}

/// Returns true if most words on the line are chords.
///
/// A single word qualifies when it is a valid chord. Longer lines need at least
/// two valid chords and those must be strictly more than half of the words.
pub fn is_chord_line(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let total = words.len();
    if total == 0 {
        return false;
    }

    let valid = words.iter().filter(|w| is_valid_chord(w)).count();
    if total == 1 {
        return valid == 1;
    }

    valid >= chord::MIN_CHORDS_PER_LINE && valid * 2 > total
}

/// Returns true if the word starts with a root letter and is not a common short word.
pub fn is_valid_chord(word: &str) -> bool {
    if !word.starts_with(chord::ROOT_LETTERS) {
        return false;
    }

    let is_short = word.chars().count() <= chord::SHORT_WORD_MAX_LEN;
    !(is_short && chord::SHORT_WORD_EXCLUSIONS.contains(&word))
}
