//! Section header cleaning.

/// Turn a raw header line into its display label.
///
/// Brackets are dropped and every word is capitalized: `"[chorus 2]"` becomes
/// `"Chorus 2"`.
pub fn clean_section_header(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| !matches!(c, '[' | ']')).collect();
    title_case(&stripped.trim().to_lowercase())
}

/// Uppercase every letter that starts a word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    out
}
