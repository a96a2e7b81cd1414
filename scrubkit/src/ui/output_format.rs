// scrubkit/src/ui/output_format.rs
//! Formatting of status messages, path check results and redaction summaries.
//!
//! Every function takes the writer and a `supports_color` flag so callers
//! decide whether ANSI styling is emitted (tests pass `false`).

use std::io::{self, Write};

use owo_colors::OwoColorize;
use scrubkit_core::{RedactionSummary, ValueKind};

fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    message: &str,
    supports_color: bool,
    paint: fn(&str) -> String,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", paint(tag), message)
    } else {
        writeln!(writer, "{} {}", tag, message)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "[info]", message, supports_color, |t| t.cyan().to_string())
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "[warn]", message, supports_color, |t| t.yellow().to_string())
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "[error]", message, supports_color, |t| t.red().bold().to_string())
}

/// Prints one `check` result line: `match    user.password`.
pub fn print_check_result<W: Write>(
    writer: &mut W,
    path: &str,
    matched: bool,
    supports_color: bool,
) -> io::Result<()> {
    let label = if matched { "match   " } else { "no match" };
    match (matched, supports_color) {
        (true, true) => writeln!(writer, "{}  {}", label.green(), path),
        (false, true) => writeln!(writer, "{}  {}", label.dimmed(), path),
        _ => writeln!(writer, "{}  {}", label, path),
    }
}

fn kind_label(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::String => "string",
        ValueKind::Integer => "integer",
        ValueKind::Float => "float",
        ValueKind::Bool => "bool",
        ValueKind::Null => "null",
        ValueKind::Object => "object",
        ValueKind::Array => "array",
    }
}

/// Prints the human-readable redaction summary.
pub fn print_summary<W: Write>(
    summary: &RedactionSummary,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let header = "Redaction Summary:";
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    if summary.total == 0 {
        writeln!(writer, "  No fields redacted.")?;
        return Ok(());
    }

    for field in &summary.fields {
        let kind = kind_label(field.kind);
        if supports_color {
            writeln!(writer, "  - {} ({})", field.path.magenta(), kind)?;
        } else {
            writeln!(writer, "  - {} ({})", field.path, kind)?;
        }
    }
    writeln!(writer, "  Total: {} field(s)", summary.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrubkit_core::{summarize, RedactedField};

    #[test]
    fn test_plain_summary_lists_paths() {
        let summary = summarize(&[
            RedactedField { path: "user.password".into(), kind: ValueKind::String },
            RedactedField { path: "items".into(), kind: ValueKind::Array },
        ]);
        let mut out = Vec::new();
        print_summary(&summary, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Redaction Summary:\n  - user.password (string)\n  - items (array)\n  Total: 2 field(s)\n"
        );
    }

    #[test]
    fn test_plain_tagged_messages() {
        let mut out = Vec::new();
        print_info_message(&mut out, "written", false).unwrap();
        print_warn_message(&mut out, "careful", false).unwrap();
        print_error_message(&mut out, "broken", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[info] written\n[warn] careful\n[error] broken\n"
        );
    }

    #[test]
    fn test_colored_tag_keeps_message_plain() {
        let mut out = Vec::new();
        print_error_message(&mut out, "broken", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with(" broken\n"));
    }

    #[test]
    fn test_plain_check_result() {
        let mut out = Vec::new();
        print_check_result(&mut out, "a.b", false, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no match  a.b\n");
    }
}
