//! Line normalization shared by every structurer.

/// Split `text` into trimmed lines with runs of spaces and tabs collapsed,
/// dropping lines that end up empty.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Trim `line` and collapse each run of spaces and tabs into one space.
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;
    for c in line.trim().chars() {
        if c == ' ' || c == '\t' {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

/// Join fragments with single spaces and normalize the result.
pub fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let joined = fragments.into_iter().collect::<Vec<_>>().join(" ");
    normalize_line(&joined)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
