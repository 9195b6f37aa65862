//! Per-codepoint dispatch between the syllable tables and pass-through.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::phonetic::PhoneticTables;
use crate::syllable::{decompose, Syllable};
use crate::utf8::{encode_into, DecodeStats, Utf8Decoder};

/// Append the transliteration of `cp` to `out`.
///
/// Codepoints outside the syllable block are written back with the lenient
/// encoder, so even surrogates and values past U+10FFFF pass through
/// byte-for-byte.
pub fn transliterate_into(tables: &PhoneticTables, cp: u32, out: &mut Vec<u8>) {
    match decompose(cp) {
        Some(syllable) => {
            for part in tables.parts(&syllable) {
                out.extend_from_slice(part.as_bytes());
            }
        }
        None => encode_into(cp, out),
    }
}

/// Transliterate one codepoint as text.
///
/// A pass-through codepoint that is not a Unicode scalar value cannot live in
/// a `String` and becomes U+FFFD; use [`transliterate_into`] to keep its bytes.
pub fn transliterate_with(tables: &PhoneticTables, cp: u32) -> String {
    match decompose(cp) {
        Some(syllable) => tables.parts(&syllable).concat(),
        None => char::from_u32(cp)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
    }
}

/// [`transliterate_with`] using the process-wide tables.
pub fn transliterate(cp: u32) -> String {
    transliterate_with(PhoneticTables::global(), cp)
}

/// Decode a line, transliterate every codepoint and concatenate the results.
pub fn process_line_with(tables: &PhoneticTables, line: &[u8]) -> Vec<u8> {
    let _span = debug_span!("process_line", len = line.len()).entered();
    let mut out = Vec::with_capacity(line.len() * 2);
    let mut decoder = Utf8Decoder::new(line);
    for cp in decoder.by_ref() {
        transliterate_into(tables, cp, &mut out);
    }
    log_recoveries(decoder.stats());
    out
}

/// [`process_line_with`] using the process-wide tables.
pub fn process_line(line: &[u8]) -> Vec<u8> {
    process_line_with(PhoneticTables::global(), line)
}

fn log_recoveries(stats: DecodeStats) {
    if !stats.is_clean() {
        debug!(
            skipped = stats.skipped,
            replaced = stats.replaced,
            truncated = stats.truncated,
            "recovered from malformed UTF-8"
        );
    }
}

// --- Diagnostics ---

/// How one decoded codepoint was transliterated.
#[derive(Debug, Serialize)]
pub struct CodepointReport {
    pub codepoint: u32,
    /// `None` for pass-through codepoints.
    pub syllable: Option<Syllable>,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct LineReport {
    pub codepoints: Vec<CodepointReport>,
    pub stats: DecodeStats,
    /// Byte offset of the truncated sequence that stopped decoding.
    pub halted_at: Option<usize>,
    pub output: String,
}

/// Trace the transliteration of a line codepoint by codepoint.
pub fn explain_line(tables: &PhoneticTables, line: &[u8]) -> LineReport {
    let mut decoder = Utf8Decoder::new(line);
    let mut codepoints = Vec::new();
    let mut output = Vec::with_capacity(line.len() * 2);
    for cp in decoder.by_ref() {
        let start = output.len();
        transliterate_into(tables, cp, &mut output);
        codepoints.push(CodepointReport {
            codepoint: cp,
            syllable: decompose(cp),
            output: String::from_utf8_lossy(&output[start..]).into_owned(),
        });
    }
    let stats = decoder.stats();
    LineReport {
        codepoints,
        stats,
        halted_at: stats.truncated.then(|| decoder.position()),
        output: String::from_utf8_lossy(&output).into_owned(),
    }
}

/// Human-readable rendering of a [`LineReport`].
pub fn format_text(report: &LineReport) -> String {
    let mut s = String::new();
    for c in &report.codepoints {
        let ch = char::from_u32(c.codepoint)
            .filter(|ch| !ch.is_control())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let structure = match c.syllable {
            Some(syl) => format!("L={:<2} V={:<2} T={:<2}", syl.lead(), syl.vowel(), syl.trail()),
            None => "pass-through".to_string(),
        };
        let _ = writeln!(
            s,
            "U+{:04X} {}  {:<14} -> {}",
            c.codepoint, ch, structure, c.output
        );
    }
    let st = &report.stats;
    let _ = writeln!(
        s,
        "decode: skipped={} replaced={} truncated={}",
        st.skipped, st.replaced, st.truncated
    );
    if let Some(offset) = report.halted_at {
        let _ = writeln!(s, "halted at byte {offset}");
    }
    let _ = writeln!(s, "output: {}", report.output);
    s
}
