/// Render text the way it would be spelled inside a double-quoted literal.
///
/// Quotes and backslashes are escaped, and newline, tab and carriage return
/// use their short escapes. Everything else is passed through.
///
/// # Examples
/// ```
/// use bnflex_core::utils::escape_text;
/// assert_eq!(escape_text("a\"b"), "a\\\"b");
/// assert_eq!(escape_text("x\ny"), "x\\ny");
/// ```
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// 1-based line and column (in characters) of a byte offset.
///
/// Offsets past the end are clamped to the end of `source`.
///
/// # Examples
/// ```
/// use bnflex_core::utils::line_col;
/// assert_eq!(line_col("ab\ncd", 0), (1, 1));
/// assert_eq!(line_col("ab\ncd", 4), (2, 2));
/// ```
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = floor_char_boundary(source, offset);
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Short human description of what sits at `offset`: the rest of the line
/// (capped at `max_chars`), quoted, or `end of input`.
///
/// # Examples
/// ```
/// use bnflex_core::utils::describe_at;
/// assert_eq!(describe_at("abc\ndef", 1, 10), "\"bc\"");
/// assert_eq!(describe_at("abc", 3, 10), "end of input");
/// ```
pub fn describe_at(source: &str, offset: usize, max_chars: usize) -> String {
    let offset = floor_char_boundary(source, offset);
    let rest = &source[offset..];
    if rest.is_empty() {
        return "end of input".to_string();
    }
    let line = rest.split('\n').next().unwrap_or_default();
    let line = if line.is_empty() { "\n" } else { line };
    let shown: String = line.chars().take(max_chars).collect();
    let ellipsis = if line.chars().count() > max_chars { "..." } else { "" };
    format!("\"{}{ellipsis}\"", escape_text(&shown))
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
