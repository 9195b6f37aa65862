use std::io::{self, Write};

use hanru_core::phonetic::PhoneticTables;
use hanru_core::process_line_with;
use hanru_core::settings::LineEnding;
use hanru_core::translit::{explain_line, format_text};

/// Transliterate each argument onto its own output line.
pub fn convert<W: Write>(
    tables: &PhoneticTables,
    texts: &[String],
    line_ending: LineEnding,
    mut writer: W,
) -> io::Result<()> {
    for text in texts {
        writer.write_all(&process_line_with(tables, text.as_bytes()))?;
        writer.write_all(line_ending.as_bytes())?;
    }
    writer.flush()
}

/// Per-codepoint report for one text, as text or pretty JSON.
pub fn explain<W: Write>(
    tables: &PhoneticTables,
    text: &str,
    json: bool,
    mut writer: W,
) -> io::Result<()> {
    let report = explain_line(tables, text.as_bytes());
    if json {
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_text(&report))?;
    }
    writer.flush()
}
