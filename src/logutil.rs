//! Keeps raw user input safe to log: control characters are escaped and
//! long lines truncated so each log record stays on a single line.

/// Longest preview of user input emitted into a log record.
const MAX_PREVIEW: usize = 120;

/// Escape a string for single-line logging, truncating past [`MAX_PREVIEW`]
/// characters with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW));
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
