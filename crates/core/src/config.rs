//! Game configuration.
//!
//! Defaults reproduce the classic rules (2 or 3 rows, up to 7 columns, 60s per
//! board). A few knobs can be overridden from the environment:
//!
//! - `PAIRS_SEED`: RNG seed (u32)
//! - `PAIRS_TIME_LIMIT_MS`: countdown per board in milliseconds
//! - `PAIRS_MAX_COLS`: largest column count the generator may pick
//! - `PAIRS_PALETTE_SIZE`: number of distinct card faces
//!
//! Unparsable values are ignored (with a warning) and the default is kept.

use std::str::FromStr;

use tracing::warn;

use crate::error::ConfigurationError;
use crate::types::{
    Symbol, DEFAULT_PALETTE_SIZE, DEFAULT_TIME_LIMIT_MS, MAX_COLS, MIN_CARDS, MIN_COLS,
    ROW_CHOICES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub time_limit_ms: u32,
    pub row_choices: Vec<u8>,
    pub min_cols: u8,
    pub max_cols: u8,
    pub palette_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            row_choices: ROW_CHOICES.to_vec(),
            min_cols: MIN_COLS,
            max_cols: MAX_COLS,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_time_limit_ms(mut self, time_limit_ms: u32) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Read overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            seed: parse_or(&lookup, "PAIRS_SEED", defaults.seed),
            time_limit_ms: parse_or(&lookup, "PAIRS_TIME_LIMIT_MS", defaults.time_limit_ms),
            max_cols: parse_or(&lookup, "PAIRS_MAX_COLS", defaults.max_cols),
            palette_size: parse_or(&lookup, "PAIRS_PALETTE_SIZE", defaults.palette_size),
            ..defaults
        }
    }

    /// The full symbol palette described by `palette_size`.
    pub fn palette(&self) -> Vec<Symbol> {
        Symbol::palette(self.palette_size)
    }

    /// Column counts that give an even grid of at least [`MIN_CARDS`] for `rows`.
    pub fn valid_cols(&self, rows: u8) -> Vec<u8> {
        (self.min_cols..=self.max_cols)
            .filter(|&cols| {
                let total = rows as usize * cols as usize;
                total % 2 == 0 && total >= MIN_CARDS
            })
            .collect()
    }

    /// Check every parameter up front so a session can never fail mid-game.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.row_choices.is_empty() {
            return Err(ConfigurationError::NoRowCandidates);
        }
        if self.min_cols == 0 || self.min_cols > self.max_cols {
            return Err(ConfigurationError::InvalidColumnRange {
                min_cols: self.min_cols,
                max_cols: self.max_cols,
            });
        }
        if self.palette_size == 0 {
            return Err(ConfigurationError::EmptyPalette);
        }
        for &rows in &self.row_choices {
            if self.valid_cols(rows).is_empty() {
                return Err(ConfigurationError::NoValidColumns {
                    rows,
                    min_cols: self.min_cols,
                    max_cols: self.max_cols,
                });
            }
        }
        Ok(())
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable config override");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_valid_cols_for_default_rows() {
        let config = GameConfig::default();
        assert_eq!(config.valid_cols(2), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(config.valid_cols(3), vec![2, 4, 6]);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(|key| match key {
            "PAIRS_SEED" => Some("42".to_string()),
            "PAIRS_TIME_LIMIT_MS" => Some(" 30000 ".to_string()),
            "PAIRS_PALETTE_SIZE" => Some("3".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, 42);
        assert_eq!(config.time_limit_ms, 30_000);
        assert_eq!(config.palette_size, 3);
        assert_eq!(config.max_cols, MAX_COLS);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = GameConfig::from_lookup(|key| match key {
            "PAIRS_SEED" => Some("not-a-number".to_string()),
            "PAIRS_MAX_COLS" => Some("-1".to_string()),
            _ => None,
        });
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let config = GameConfig {
            row_choices: vec![],
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::NoRowCandidates));

        let config = GameConfig {
            min_cols: 5,
            max_cols: 4,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidColumnRange { .. })
        ));

        let config = GameConfig {
            palette_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::EmptyPalette));

        // 3 rows with only odd column counts never yields an even grid.
        let config = GameConfig {
            row_choices: vec![3],
            min_cols: 3,
            max_cols: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::NoValidColumns {
                rows: 3,
                min_cols: 3,
                max_cols: 3
            })
        );
    }
}
