//! Glyph alphabet.
//!
//! Tiles carry a `Glyph`, an index into the fixed Devanagari alphabet below
//! (vowels, then consonants, then conjuncts). Difficulty levels pick a
//! subset of it.

use serde::{Deserialize, Serialize};

/// Vowels (13).
pub const VOWELS: [&str; 13] = [
    "अ", "आ", "इ", "ई", "उ", "ऊ", "ऋ", "ए", "ऐ", "ओ", "औ", "अं", "अः",
];

/// Consonants (33), grouped velar, palatal, retroflex, dental, labial, then
/// semi-vowels and sibilants.
pub const CONSONANTS: [&str; 33] = [
    "क", "ख", "ग", "घ", "ङ",
    "च", "छ", "ज", "झ", "ञ",
    "ट", "ठ", "ड", "ढ", "ण",
    "त", "थ", "द", "ध", "न",
    "प", "फ", "ब", "भ", "म",
    "य", "र", "ल", "व", "श", "ष", "स", "ह",
];

/// Conjunct consonants (4).
pub const CONJUNCTS: [&str; 4] = ["क्ष", "त्र", "ज्ञ", "श्र"];

/// Total number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = VOWELS.len() + CONSONANTS.len() + CONJUNCTS.len();

const CONSONANT_BASE: u16 = VOWELS.len() as u16;
const CONJUNCT_BASE: u16 = CONSONANT_BASE + CONSONANTS.len() as u16;

/// A tile symbol. Two tiles match when their glyphs are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Glyph(pub u16);

impl Glyph {
    /// The `i`-th vowel.
    #[must_use]
    pub const fn vowel(i: u16) -> Self {
        Self(i)
    }

    /// The `i`-th consonant.
    #[must_use]
    pub const fn consonant(i: u16) -> Self {
        Self(CONSONANT_BASE + i)
    }

    /// The `i`-th conjunct.
    #[must_use]
    pub const fn conjunct(i: u16) -> Self {
        Self(CONJUNCT_BASE + i)
    }

    /// Display string, or `"?"` for an index outside the alphabet.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        let i = self.0 as usize;
        let vowels = VOWELS.len();
        let consonants = vowels + CONSONANTS.len();
        if i < vowels {
            VOWELS[i]
        } else if i < consonants {
            CONSONANTS[i - vowels]
        } else if i < ALPHABET_LEN {
            CONJUNCTS[i - consonants]
        } else {
            "?"
        }
    }

    /// Every glyph, in alphabet order.
    pub fn all() -> impl Iterator<Item = Glyph> {
        (0..ALPHABET_LEN as u16).map(Glyph)
    }

    /// The first `n` vowels.
    pub fn vowels(n: usize) -> impl Iterator<Item = Glyph> {
        (0..n.min(VOWELS.len()) as u16).map(Glyph::vowel)
    }

    /// The first `n` consonants.
    pub fn consonants(n: usize) -> impl Iterator<Item = Glyph> {
        (0..n.min(CONSONANTS.len()) as u16).map(Glyph::consonant)
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
