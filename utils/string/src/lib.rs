//! Character-aware helpers for shortening user-visible text.

/// Returns true for every character that terminates a line: `\n`, `\r`, the
/// vertical tab and form feed, the ASCII record separators, NEL and the
/// Unicode line/paragraph separators.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace as understood when trimming free-form text. Extends
/// [`char::is_whitespace`] with the ASCII separators `\x1c`..=`\x1f`, which
/// also count as line breaks or spacing in terminal output.
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1c}'..='\u{1f}')
}

/// Trims [`is_blank`] characters from both ends of `text`.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// The text before the first line break, or all of `text` when it has none.
pub fn first_line(text: &str) -> &str {
    match text.find(is_line_break) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Borrow at most `max_chars` characters from the start of `text`. Counts
/// `char`s, so multi-byte text is never split mid-character.
pub fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
