//! Hangul syllable to Russian (Cyrillic) transliteration.
//!
//! Bytes are decoded leniently ([`utf8`]), each syllable of the Hangul block is
//! split into initial/vowel/final indices ([`syllable`]), looked up in the
//! phonetic tables ([`phonetic`]) and concatenated ([`translit`]). Everything
//! outside the block passes through unchanged.

pub mod phonetic;
pub mod settings;
pub mod syllable;
pub mod translit;
pub mod utf8;

pub use translit::{process_line, process_line_with, transliterate, transliterate_with};
