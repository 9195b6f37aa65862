//! Lenient UTF-8 codec.
//!
//! Decoding never fails: malformed input is absorbed with one of three
//! recovery policies and counted in [`DecodeStats`].
//!
//! - Invalid leading byte (stray `10xxxxxx` or `11111xxx`): skipped.
//! - Bad continuation byte: the whole claimed span becomes [`REPLACEMENT`].
//! - Truncated tail sequence: decoding halts, nothing is emitted for it.
//!
//! Neither side validates overlong forms, surrogates or the U+10FFFF limit.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use serde::Serialize;
use tracing::trace;

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Payload bits of a continuation byte.
const CONT_MASK: u8 = 0x3F;

/// Recoveries performed while decoding one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Invalid leading bytes dropped.
    pub skipped: usize,
    /// Sequences replaced with U+FFFD because of a bad continuation byte.
    pub replaced: usize,
    /// Decoding stopped at a sequence cut short by the end of input.
    pub truncated: bool,
}

impl DecodeStats {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.replaced == 0 && !self.truncated
    }
}

/// Payload bits and continuation byte count declared by a leading byte.
#[inline]
fn leading_byte(byte: u8) -> Option<(u32, usize)> {
    match byte {
        0x00..=0x7F => Some((byte as u32, 0)),
        0xC0..=0xDF => Some(((byte & 0x1F) as u32, 1)),
        0xE0..=0xEF => Some(((byte & 0x0F) as u32, 2)),
        0xF0..=0xF7 => Some(((byte & 0x07) as u32, 3)),
        _ => None,
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Single-pass iterator over the codepoints of a byte buffer.
pub struct Utf8Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    stats: DecodeStats,
}

impl<'a> Utf8Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            stats: DecodeStats::default(),
        }
    }

    /// Recoveries performed so far.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Byte offset of the next sequence. After a truncation halt this is the
    /// offset of the truncated sequence's leading byte.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.stats.truncated {
            return None;
        }

        while let Some(&first) = self.bytes.get(self.pos) {
            let Some((mut code, extra)) = leading_byte(first) else {
                trace!(offset = self.pos, byte = first, "skipping invalid leading byte");
                self.stats.skipped += 1;
                self.pos += 1;
                continue;
            };

            let end = self.pos + 1 + extra;
            if end > self.bytes.len() {
                trace!(
                    offset = self.pos,
                    needed = extra,
                    available = self.bytes.len() - self.pos - 1,
                    "truncated sequence, halting"
                );
                self.stats.truncated = true;
                return None;
            }

            for (i, &byte) in self.bytes[self.pos + 1..end].iter().enumerate() {
                if !is_continuation(byte) {
                    trace!(
                        offset = self.pos + 1 + i,
                        byte,
                        "bad continuation byte, emitting U+FFFD"
                    );
                    self.stats.replaced += 1;
                    code = REPLACEMENT;
                    break;
                }
                code = (code << 6) | (byte & CONT_MASK) as u32;
            }

            // The claimed span is consumed even when a continuation byte was bad.
            self.pos = end;
            return Some(code);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stats.truncated {
            return (0, Some(0));
        }
        (0, Some(self.bytes.len() - self.pos))
    }
}

impl FusedIterator for Utf8Decoder<'_> {}

/// Decode a whole buffer.
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    Utf8Decoder::new(bytes).collect()
}

/// The UTF-8 form of one codepoint, kept on the stack.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    buf: [u8; 4],
    len: u8,
}

impl Encoded {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for Encoded {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoded({:02X?})", self.as_bytes())
    }
}

/// Encode one codepoint. Total over `u32`: values past U+FFFF always take four
/// bytes and keep only the low 21 bits.
pub fn encode(cp: u32) -> Encoded {
    let (buf, len) = if cp <= 0x7F {
        ([cp as u8, 0, 0, 0], 1)
    } else if cp <= 0x7FF {
        (
            [
                0xC0 | ((cp >> 6) & 0x1F) as u8,
                0x80 | (cp & 0x3F) as u8,
                0,
                0,
            ],
            2,
        )
    } else if cp <= 0xFFFF {
        (
            [
                0xE0 | ((cp >> 12) & 0x0F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
                0,
            ],
            3,
        )
    } else {
        (
            [
                0xF0 | ((cp >> 18) & 0x07) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ],
            4,
        )
    };
    Encoded { buf, len }
}

/// Append the UTF-8 form of `cp` to `out`.
pub fn encode_into(cp: u32, out: &mut Vec<u8>) {
    out.extend_from_slice(&encode(cp));
}
