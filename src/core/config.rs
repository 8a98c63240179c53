//! Game configuration.
//!
//! The rules themselves are fixed. Configuration only chooses the dice
//! seed and which color opens the game.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Configuration for a Ludo game.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, GameConfig};
///
/// let config = GameConfig::new().seed(7).first_color(Color::Green);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.first_color, Color::Green);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default dice source.
    pub seed: u64,

    /// Color that rolls first, at start and after every restart.
    pub first_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_color: Color::Red,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn first_color(mut self, color: Color) -> Self {
        self.first_color = color;
        self
    }
}
