//! Core types produced by the annotator.
//!
//! Everything here is transient: built for one call, handed to the caller,
//! never stored by this crate.

use serde::Serialize;

use crate::constants::markup;

/// The classification assigned to a single line of a chord sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A song structure label such as `[Verse 1]` or `Chorus:`.
    SectionHeader,
    /// A blank or whitespace-only line.
    Empty,
    /// A line made up predominantly of chord tokens.
    ChordLine,
    /// Anything else.
    LyricsLine,
}

impl LineKind {
    /// Returns the CSS class of the container emitted for this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::SectionHeader => markup::SECTION_HEADER_CLASS,
            Self::Empty => markup::EMPTY_LINE_CLASS,
            Self::ChordLine => markup::CHORD_LINE_CLASS,
            Self::LyricsLine => markup::LYRICS_LINE_CLASS,
        }
    }
}

/// A chord recognized inside a chord line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordToken {
    /// The chord exactly as written, e.g. `Am7` or `G/B`.
    pub text: String,
    /// Byte offset of the chord within the raw line.
    pub start: usize,
}

impl ChordToken {
    /// Byte offset one past the end of the chord.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// One input line after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    /// How the line was classified.
    pub kind: LineKind,
    /// Display text: the cleaned label for section headers, the raw line otherwise.
    pub text: String,
    /// Highlighted chords, in line order. Empty unless `kind` is [`LineKind::ChordLine`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chords: Vec<ChordToken>,
}

/// A run of annotated lines under one section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Cleaned header text (e.g. "Verse 1"), or `None` for lines before the first header.
    pub label: Option<String>,
    /// The lines following the header, up to the next one.
    pub lines: Vec<AnnotatedLine>,
}

impl Section {
    /// Returns true if the section holds only blank lines (or none at all).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.kind == LineKind::Empty)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn class_names_are_distinct() {
        let kinds = [
            LineKind::SectionHeader,
            LineKind::Empty,
            LineKind::ChordLine,
            LineKind::LyricsLine,
        ];
        let mut names: Vec<_> = kinds.iter().map(|k| k.class_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), kinds.len());
    }

    #[test]
    fn chord_token_end_counts_bytes() {
        let token = ChordToken { text: "F#m".to_string(), start: 4 };
        assert_eq!(token.end(), 7);
    }

    #[test]
    fn line_kind_serializes_snake_case() {
        let json = serde_json::to_string(&LineKind::ChordLine).unwrap();
        assert_eq!(json, "\"chord_line\"");
    }
}
