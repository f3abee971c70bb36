//! Configuration types.
//!
//! - `Difficulty`: which built-in level is being played
//! - `DifficultyConfig`: static per-level data (tile count, alphabet, allowances)
//! - `EngineConfig`: engine tuning (seed, timer intervals, retry cap)
//!
//! Both configs are read-only once a session starts.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::glyph::Glyph;

/// Built-in difficulty levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Flat 6×6 layout.
    #[default]
    #[serde(rename = "navagantuk")]
    Easy,
    /// Two-tier layout.
    #[serde(rename = "anubhavi")]
    Medium,
    /// Six-layer pyramid.
    #[serde(rename = "shreshtha")]
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Stable key used for storage.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "navagantuk",
            Difficulty::Medium => "anubhavi",
            Difficulty::Hard => "shreshtha",
        }
    }

    /// Parse a storage key. Unknown keys fall back to `Easy`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Static configuration for one difficulty level.
///
/// ```
/// use rust_mahjong::core::{Difficulty, DifficultyConfig};
///
/// let hard = DifficultyConfig::for_difficulty(Difficulty::Hard);
/// assert_eq!(hard.tile_count, 144);
/// assert_eq!(hard.alphabet.len(), 50);
/// assert!(hard.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Which level this is (selects the layout).
    pub difficulty: Difficulty,

    /// Display name.
    pub name: String,

    /// Transliterated name.
    pub subtitle: String,

    /// Short description ("Easy", ...).
    pub description: String,

    /// Tiles to place (capped by the layout size).
    pub tile_count: usize,

    /// Pairs on a full board.
    pub pair_count: usize,

    /// Glyphs cycled through when dealing.
    pub alphabet: Vec<Glyph>,

    /// Starting hint allowance.
    pub hints: u32,

    /// Starting shuffle allowance.
    pub shuffles: u32,

    /// Seconds added to the clock per shuffle.
    pub shuffle_penalty_secs: u32,
}

impl DifficultyConfig {
    /// The built-in configuration for a level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                name: "नवागंतुक".to_string(),
                subtitle: "Navagantuk".to_string(),
                description: "Easy".to_string(),
                tile_count: 36,
                pair_count: 18,
                alphabet: Glyph::vowels(11).chain(Glyph::consonants(7)).collect(),
                hints: 5,
                shuffles: 3,
                shuffle_penalty_secs: 0,
            },
            Difficulty::Medium => Self {
                difficulty,
                name: "अनुभवी".to_string(),
                subtitle: "Anubhavi".to_string(),
                description: "Medium".to_string(),
                tile_count: 72,
                pair_count: 36,
                alphabet: Glyph::vowels(13).chain(Glyph::consonants(23)).collect(),
                hints: 3,
                shuffles: 2,
                shuffle_penalty_secs: 0,
            },
            Difficulty::Hard => Self {
                difficulty,
                name: "श्रेष्ठ".to_string(),
                subtitle: "Shreshtha".to_string(),
                description: "Hard".to_string(),
                tile_count: 144,
                pair_count: 72,
                alphabet: Glyph::all().collect(),
                hints: 2,
                shuffles: 1,
                shuffle_penalty_secs: 0,
            },
        }
    }

    /// Set the tile count and derive the matching pair count.
    #[must_use]
    pub fn with_tile_count(mut self, count: usize) -> Self {
        self.tile_count = count;
        self.pair_count = count / 2;
        self
    }

    /// Set the pair count only.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    /// Replace the dealing alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Vec<Glyph>) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the hint allowance.
    #[must_use]
    pub fn with_hints(mut self, hints: u32) -> Self {
        self.hints = hints;
        self
    }

    /// Set the shuffle allowance.
    #[must_use]
    pub fn with_shuffles(mut self, shuffles: u32) -> Self {
        self.shuffles = shuffles;
        self
    }

    /// Set the per-shuffle time penalty.
    #[must_use]
    pub fn with_shuffle_penalty(mut self, secs: u32) -> Self {
        self.shuffle_penalty_secs = secs;
        self
    }

    /// Check that the configuration can produce a perfectly paired board.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.tile_count < 2 || self.tile_count % 2 != 0 {
            return Err(EngineError::InvalidConfig(format!(
                "tile count must be a positive even number, got {}",
                self.tile_count
            )));
        }
        if self.pair_count * 2 != self.tile_count {
            return Err(EngineError::InvalidConfig(format!(
                "{} pairs do not fill {} tiles",
                self.pair_count, self.tile_count
            )));
        }
        if self.alphabet.is_empty() {
            return Err(EngineError::InvalidConfig("alphabet is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

/// Engine tuning parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for deals and shuffles. Same seed produces the same deals.
    pub seed: u64,

    /// Milliseconds per elapsed-time tick.
    pub tick_interval_ms: u32,

    /// Milliseconds a hint stays visible.
    pub hint_display_ms: u32,

    /// Random deals/shuffles tried before the deterministic repair.
    pub max_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_interval_ms: 1000,
            hint_display_ms: 3000,
            max_attempts: 64,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a seed drawn from the thread RNG.
    #[must_use]
    pub fn with_random_seed(mut self) -> Self {
        self.seed = rand::random();
        self
    }

    /// Set the tick interval. Zero is clamped to 1 ms.
    #[must_use]
    pub fn with_tick_interval(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms.max(1);
        self
    }

    /// Set how long hints stay visible.
    #[must_use]
    pub fn with_hint_display(mut self, ms: u32) -> Self {
        self.hint_display_ms = ms;
        self
    }

    /// Set the retry cap for generation and shuffling.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(Difficulty::Medium.key(), "anubhavi");
        assert_eq!(Difficulty::from_key("shreshtha"), Difficulty::Hard);
        assert_eq!(Difficulty::from_key("nonsense"), Difficulty::Easy);
        assert_eq!(format!("{}", Difficulty::Easy), "navagantuk");
    }

    #[test]
    fn test_builtin_levels() {
        let easy = DifficultyConfig::for_difficulty(Difficulty::Easy);
        assert_eq!(easy.tile_count, 36);
        assert_eq!(easy.pair_count, 18);
        assert_eq!(easy.alphabet.len(), 18);
        assert_eq!((easy.hints, easy.shuffles), (5, 3));

        let medium = DifficultyConfig::for_difficulty(Difficulty::Medium);
        assert_eq!(medium.alphabet.len(), 36);
        assert_eq!((medium.hints, medium.shuffles), (3, 2));

        let hard = DifficultyConfig::for_difficulty(Difficulty::Hard);
        assert_eq!(hard.pair_count, 72);
        assert_eq!((hard.hints, hard.shuffles), (2, 1));

        for d in Difficulty::ALL {
            assert!(DifficultyConfig::for_difficulty(d).validate().is_ok());
        }
    }

    #[test]
    fn test_builder_pattern() {
        let config = DifficultyConfig::default()
            .with_tile_count(4)
            .with_alphabet(vec![Glyph(0)])
            .with_hints(0)
            .with_shuffles(9)
            .with_shuffle_penalty(15);

        assert_eq!(config.pair_count, 2);
        assert_eq!(config.hints, 0);
        assert_eq!(config.shuffles, 9);
        assert_eq!(config.shuffle_penalty_secs, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let odd = DifficultyConfig::default().with_tile_count(5);
        assert!(matches!(odd.validate(), Err(EngineError::InvalidConfig(_))));

        let mismatch = DifficultyConfig::default().with_pair_count(3);
        assert!(mismatch.validate().is_err());

        let empty = DifficultyConfig::default().with_alphabet(Vec::new());
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.hint_display_ms, 3000);

        let tuned = EngineConfig::default()
            .with_seed(7)
            .with_tick_interval(0)
            .with_hint_display(500)
            .with_max_attempts(3);
        assert_eq!(tuned.seed, 7);
        assert_eq!(tuned.tick_interval_ms, 1);
        assert_eq!(tuned.hint_display_ms, 500);
        assert_eq!(tuned.max_attempts, 3);
    }

    #[test]
    fn test_serialization() {
        let config = DifficultyConfig::for_difficulty(Difficulty::Medium);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"anubhavi\""));
        let deserialized: DifficultyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
