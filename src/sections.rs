//! Group annotated lines into song sections.

use crate::types::{AnnotatedLine, LineKind, Section};

/// Split annotated lines into sections.
///
/// - A section header opens a new section labelled with its cleaned text
/// - Lines before the first header form an unlabelled section, dropped if blank
/// - Blank lines stay inside the section they appear in
pub fn group_sections(lines: &[AnnotatedLine]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section { label: None, lines: Vec::new() };

    for line in lines {
        if line.kind == LineKind::SectionHeader {
            let previous = std::mem::replace(
                &mut current,
                Section { label: Some(line.text.clone()), lines: Vec::new() },
            );
            if previous.label.is_some() || !previous.is_blank() {
                sections.push(previous);
            }
        } else {
            current.lines.push(line.clone());
        }
    }

    // Last section; a trailing header with no body still counts
    if current.label.is_some() || !current.is_blank() {
        sections.push(current);
    }

    sections
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::annotator::annotate_lines;

    #[test]
    fn test_group_sections_simple() {
        let lines = annotate_lines("[Verse 1]\nG C\nAmazing grace\n\n[Chorus]\nD G\nI once was lost");

        let sections = group_sections(&lines);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, Some("Verse 1".to_string()));
        assert_eq!(sections[0].lines.len(), 3);
        assert_eq!(sections[1].label, Some("Chorus".to_string()));
        assert_eq!(sections[1].lines[0].kind, LineKind::ChordLine);
    }

    #[test]
    fn test_group_sections_no_labels() {
        let lines = annotate_lines("First line\n\nSecond line");

        let sections = group_sections(&lines);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].label.is_none());
        assert_eq!(sections[0].lines.len(), 3);
    }

    #[test]
    fn test_leading_blank_lines_dropped() {
        let lines = annotate_lines("\n\nIntro\nG D");

        let sections = group_sections(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, Some("Intro".to_string()));
    }

    #[test]
    fn test_trailing_header_kept() {
        let lines = annotate_lines("Some words\nOutro");

        let sections = group_sections(&lines);
        assert_eq!(sections.len(), 2);
        assert!(sections[1].lines.is_empty());
    }
}
