//! `chordsheet` - chord sheet annotation.
//!
//! Classifies each line of a song's chord sheet (section header, blank, chord
//! line, lyrics) and highlights chord tokens on chord lines, producing markup
//! for a web page or structured data for other renderers.

pub mod annotator;
pub mod config;
pub mod constants;
pub mod error;
pub mod sections;
pub mod sheet;
pub mod types;

pub use annotator::{annotate, annotate_line, annotate_lines, chords_used};
pub use sections::group_sections;
pub use types::{AnnotatedLine, ChordToken, LineKind, Section};
