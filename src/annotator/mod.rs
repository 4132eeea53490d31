//! Chord sheet annotation.
//!
//! Takes raw song text, classifies each line and highlights the chords on
//! chord lines. Every input line yields exactly one output line, in order.

pub mod chords;
pub mod classify;
pub mod header;
pub mod markup;

pub use chords::{chords_used, find_chord_tokens};
pub use classify::{classify_line, is_chord_line, is_section_header, is_valid_chord};
pub use header::clean_section_header;
pub use markup::render_line;

use crate::types::{AnnotatedLine, LineKind};

/// Annotate a whole sheet and return the markup, one container per input line.
pub fn annotate(text: &str) -> String {
    annotate_lines(text)
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Annotate a whole sheet into structured lines.
pub fn annotate_lines(text: &str) -> Vec<AnnotatedLine> {
    let lines: Vec<AnnotatedLine> = text.split('\n').map(annotate_line).collect();

    tracing::debug!(
        "Annotated {} lines ({} chord lines, {} section headers)",
        lines.len(),
        lines.iter().filter(|l| l.kind == LineKind::ChordLine).count(),
        lines.iter().filter(|l| l.kind == LineKind::SectionHeader).count(),
    );

    lines
}

/// Classify and annotate a single raw line.
pub fn annotate_line(line: &str) -> AnnotatedLine {
    let kind = classify_line(line);

    match kind {
        LineKind::SectionHeader => AnnotatedLine {
            kind,
            text: clean_section_header(line),
            chords: Vec::new(),
        },
        LineKind::ChordLine => AnnotatedLine {
            kind,
            text: line.to_string(),
            chords: find_chord_tokens(line),
        },
        LineKind::Empty | LineKind::LyricsLine => AnnotatedLine {
            kind,
            text: line.to_string(),
            chords: Vec::new(),
        },
    }
}
