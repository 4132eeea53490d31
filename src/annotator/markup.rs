//! Markup rendering for annotated lines.
//!
//! All line text is HTML-escaped. Chord spellings never contain characters
//! that need escaping, so highlighted chords keep their column alignment.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::constants::markup::CHORD_SPAN_CLASS;
use crate::types::{AnnotatedLine, ChordToken};

/// Render one annotated line as a classed container.
pub fn render_line(line: &AnnotatedLine) -> String {
    let content = if line.chords.is_empty() {
        escape(line.text.as_str()).into_owned()
    } else {
        highlight_chords(&line.text, &line.chords)
    };

    format!("<div class=\"{}\">{content}</div>", line.kind.class_name())
}

/// Wrap each chord in a highlight span, leaving the text between them untouched
/// apart from escaping.
fn highlight_chords(raw: &str, chords: &[ChordToken]) -> String {
    let mut out = String::with_capacity(raw.len() + chords.len() * 32);
    let mut cursor = 0;

    for chord in chords {
        // Tokens come from `raw`, in order and non-overlapping.
        let Some(gap) = raw.get(cursor..chord.start) else {
            continue;
        };
        out.push_str(&escape(gap));
        let _ = write!(out, "<span class=\"{CHORD_SPAN_CLASS}\">{}</span>", chord.text);
        cursor = chord.end();
    }

    out.push_str(&escape(raw.get(cursor..).unwrap_or_default()));
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::LineKind;

    #[test]
    fn test_render_lyrics_escapes() {
        let line = AnnotatedLine {
            kind: LineKind::LyricsLine,
            text: "rock & roll <3".to_string(),
            chords: Vec::new(),
        };
        assert_eq!(
            render_line(&line),
            "<div class=\"lyrics-line\">rock &amp; roll &lt;3</div>"
        );
    }

    #[test]
    fn test_render_chord_spans_keep_spacing() {
        let line = AnnotatedLine {
            kind: LineKind::ChordLine,
            text: "  G   C".to_string(),
            chords: vec![
                ChordToken { text: "G".to_string(), start: 2 },
                ChordToken { text: "C".to_string(), start: 6 },
            ],
        };
        assert_eq!(
            render_line(&line),
            "<div class=\"chord-line\">  <span class=\"chord\">G</span>   <span class=\"chord\">C</span></div>"
        );
    }

    #[test]
    fn test_render_empty() {
        let line = AnnotatedLine { kind: LineKind::Empty, text: String::new(), chords: Vec::new() };
        assert_eq!(render_line(&line), "<div class=\"empty-line\"></div>");
    }
}
