//! TEXT value escaping.

/// Characters that, after a backslash, already form an escape sequence.
const ESCAPED: &[char] = &['n', 'N', '\'', '"', '&', 'r', 't', 'b', 'f', ';', ','];

/// Escape a free-text value for use after `PROPERTY:`.
///
/// Existing two-character sequences such as `\n` or `\,` are kept as they
/// are; any other backslash is doubled. Commas and semicolons get a leading
/// backslash and real control characters become their escape sequence, so
/// the value always fits on one line.
///
/// Not idempotent: a doubled backslash is doubled again on a second pass.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if ESCAPED.contains(&next) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            },
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }

    out
}
