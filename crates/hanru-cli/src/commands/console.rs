//! Line-oriented console loop: prompt once, then one output line per input line.

use std::io::{self, BufRead, Write};

use hanru_core::phonetic::PhoneticTables;
use hanru_core::process_line_with;
use hanru_core::settings::{LineEnding, Settings};
use tracing::debug;

pub struct ConsoleOptions {
    pub prompt: Option<String>,
    pub line_ending: LineEnding,
    pub flush_each_line: bool,
}

impl ConsoleOptions {
    pub fn from_settings(settings: &Settings, quiet: bool) -> Self {
        let show = settings.console.show_prompt && !quiet;
        Self {
            prompt: show.then(|| settings.console.prompt.clone()),
            line_ending: settings.output.line_ending,
            flush_each_line: settings.output.flush_each_line,
        }
    }
}

/// Transliterate `reader` line by line into `writer` until EOF.
///
/// Lines are split on `\n` only and handed over as raw bytes, so invalid
/// UTF-8 reaches the lenient decoder untouched. Returns the line count.
pub fn run<R: BufRead, W: Write>(
    tables: &PhoneticTables,
    options: &ConsoleOptions,
    mut reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let eol = options.line_ending.as_bytes();

    if let Some(ref prompt) = options.prompt {
        writer.write_all(prompt.as_bytes())?;
        writer.write_all(eol)?;
        writer.flush()?;
    }

    let mut buf = Vec::new();
    let mut lines = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        writer.write_all(&process_line_with(tables, &buf))?;
        writer.write_all(eol)?;
        if options.flush_each_line {
            writer.flush()?;
        }
        lines += 1;
    }

    writer.flush()?;
    debug!(lines, "input exhausted");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanru_core::settings::parse_settings_toml;
    use std::io::Cursor;

    fn options(prompt: Option<&str>, line_ending: LineEnding) -> ConsoleOptions {
        ConsoleOptions {
            prompt: prompt.map(str::to_string),
            line_ending,
            flush_each_line: true,
        }
    }

    fn run_bytes(input: &[u8], opts: &ConsoleOptions) -> (Vec<u8>, usize) {
        let tables = PhoneticTables::builtin();
        let mut out = Vec::new();
        let n = run(&tables, opts, Cursor::new(input), &mut out).unwrap();
        (out, n)
    }

    #[test]
    fn prompt_then_lines() {
        let opts = options(Some("Enter UTF-8 text:"), LineEnding::Lf);
        let (out, n) = run_bytes("안녕하세요\nHi, 한국!\n".as_bytes(), &opts);
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter UTF-8 text:\nаннёнхасэё\nHi, хангук!\n"
        );
    }

    #[test]
    fn last_line_without_newline() {
        let opts = options(None, LineEnding::Lf);
        let (out, n) = run_bytes("가\n나".as_bytes(), &opts);
        assert_eq!(n, 2);
        assert_eq!(out, "га\nна\n".as_bytes());
    }

    #[test]
    fn empty_input_prints_only_prompt() {
        let opts = options(Some(">"), LineEnding::Lf);
        let (out, n) = run_bytes(b"", &opts);
        assert_eq!(n, 0);
        assert_eq!(out, b">\n");
    }

    #[test]
    fn blank_lines_are_kept() {
        let opts = options(None, LineEnding::Lf);
        let (out, n) = run_bytes(b"\n\n", &opts);
        assert_eq!(n, 2);
        assert_eq!(out, b"\n\n");
    }

    #[test]
    fn crlf_output_and_carriage_return_passthrough() {
        let opts = options(None, LineEnding::Crlf);
        let (out, _) = run_bytes("한\r\n".as_bytes(), &opts);
        // Only '\n' splits lines; the '\r' is ordinary input.
        assert_eq!(out, "хан\r\r\n".as_bytes());
    }

    #[test]
    fn invalid_bytes_follow_decoder_policies() {
        let opts = options(None, LineEnding::Lf);
        let mut input = vec![0x80, b'a', 0xC2, 0x20, b'b', b'\n'];
        input.extend_from_slice(&[b'c', 0xE0, b'\n']);
        let (out, n) = run_bytes(&input, &opts);
        assert_eq!(n, 2);
        assert_eq!(out, "a\u{FFFD}b\nc\n".as_bytes());
    }

    #[test]
    fn options_from_settings() {
        let s = parse_settings_toml(hanru_core::settings::default_toml()).unwrap();
        let shown = ConsoleOptions::from_settings(&s, false);
        assert_eq!(shown.prompt.as_deref(), Some("Enter UTF-8 text:"));
        assert_eq!(shown.line_ending, LineEnding::Lf);

        let quiet = ConsoleOptions::from_settings(&s, true);
        assert!(quiet.prompt.is_none());
    }
}
