//! Static tables used by the annotator.
//!
//! The keyword and exclusion lists are data, not behavior: extend them here
//! without touching the classifier.

/// Section header vocabulary.
pub mod section {
    /// Keywords that mark a song section when they stand alone on a line.
    ///
    /// Matched case-insensitively, optionally bracketed and numbered
    /// (`[Verse 2]`, `chorus:`).
    pub const KEYWORDS: &[&str] = &[
        "intro",
        "verse",
        "chorus",
        "bridge",
        "outro",
        "refrain",
        "pre-chorus",
        "interlude",
        "solo",
        "coda",
        "reff",
        "bait",
    ];
}

/// Chord recognition tables.
pub mod chord {
    /// Root letters a chord may start with. Case-sensitive.
    pub const ROOT_LETTERS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F', 'G'];

    /// Short lyric words that would otherwise pass the root-letter test.
    ///
    /// Only applied to words of at most [`SHORT_WORD_MAX_LEN`] characters.
    pub const SHORT_WORD_EXCLUSIONS: &[&str] = &[
        "An", "As", "At", "Be", "By", "Do", "Go", "He", "If", "In", "Is", "It", "Me", "My", "No",
        "Of", "On", "Or", "So", "To", "Up", "We",
    ];

    /// Longest word length the exclusion list applies to.
    pub const SHORT_WORD_MAX_LEN: usize = 2;

    /// Fewest valid chords a multi-word line needs to count as a chord line.
    pub const MIN_CHORDS_PER_LINE: usize = 2;
}

/// CSS class names carried by the emitted markup.
pub mod markup {
    /// Container class for section headers.
    pub const SECTION_HEADER_CLASS: &str = "section-header";

    /// Container class for blank lines.
    pub const EMPTY_LINE_CLASS: &str = "empty-line";

    /// Container class for chord lines.
    pub const CHORD_LINE_CLASS: &str = "chord-line";

    /// Container class for lyric lines.
    pub const LYRICS_LINE_CLASS: &str = "lyrics-line";

    /// Class of the inline span wrapping each highlighted chord.
    pub const CHORD_SPAN_CLASS: &str = "chord";
}
