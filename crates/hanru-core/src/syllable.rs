//! Algorithmic structure of the Hangul syllable block (U+AC00..=U+D7A3).
//!
//! Every syllable is `SBase + (L × VCount + V) × TCount + T`, with 19 initial
//! consonants, 21 vowels and 28 finals (final 0 meaning "no final").

use serde::Serialize;

/// First syllable, 가.
pub const S_BASE: u32 = 0xAC00;
/// Number of initial consonants.
pub const L_COUNT: usize = 19;
/// Number of vowels.
pub const V_COUNT: usize = 21;
/// Number of finals, including "no final".
pub const T_COUNT: usize = 28;
/// Syllables sharing one initial consonant.
pub const N_COUNT: usize = V_COUNT * T_COUNT;
/// Size of the syllable block.
pub const S_COUNT: usize = L_COUNT * N_COUNT;

/// Initial, vowel and final indices of one syllable.
///
/// Only obtainable through [`decompose`] or [`Syllable::new`], so the indices
/// are always within their table bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    lead: u8,
    vowel: u8,
    trail: u8,
}

impl Syllable {
    /// Returns `None` if any index is out of range.
    pub fn new(lead: usize, vowel: usize, trail: usize) -> Option<Self> {
        if lead >= L_COUNT || vowel >= V_COUNT || trail >= T_COUNT {
            return None;
        }
        Some(Self {
            lead: lead as u8,
            vowel: vowel as u8,
            trail: trail as u8,
        })
    }

    pub fn lead(&self) -> usize {
        self.lead as usize
    }

    pub fn vowel(&self) -> usize {
        self.vowel as usize
    }

    /// Final consonant index; 0 means the syllable has no final.
    pub fn trail(&self) -> usize {
        self.trail as usize
    }

    /// Inverse of [`decompose`].
    pub fn to_codepoint(&self) -> u32 {
        let index = (self.lead() * V_COUNT + self.vowel()) * T_COUNT + self.trail();
        S_BASE + index as u32
    }
}

/// Whether `cp` lies in the syllable block.
#[inline]
pub fn is_syllable(cp: u32) -> bool {
    cp.wrapping_sub(S_BASE) < S_COUNT as u32
}

/// Split a syllable into its indices; `None` outside the block.
pub fn decompose(cp: u32) -> Option<Syllable> {
    if !is_syllable(cp) {
        return None;
    }
    let index = (cp - S_BASE) as usize;
    Some(Syllable {
        lead: (index / N_COUNT) as u8,
        vowel: ((index % N_COUNT) / T_COUNT) as u8,
        trail: (index % T_COUNT) as u8,
    })
}
