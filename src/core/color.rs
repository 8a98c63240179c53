//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The four fixed seats of the board, totally ordered for turn rotation:
//! Red, Blue, Green, Yellow.
//!
//! ## ColorMap
//!
//! Per-color storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of colors at the table.
pub const COLOR_COUNT: usize = 4;

/// A player color.
///
/// Declaration order is rotation order: play passes Red, Blue, Green,
/// Yellow and then wraps back to Red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in rotation order.
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Get the 0-based rotation index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }


    /// The color that plays after this one.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// assert_eq!(Color::Red.next(), Color::Blue);
    /// assert_eq!(Color::Yellow.next(), Color::Red);
    /// ```
    #[must_use]
    pub const fn next(self) -> Color {
        Self::ALL[(self.index() + 1) % COLOR_COUNT]
    }

    /// Iterate over all colors in rotation order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut finished: ColorMap<u8> = ColorMap::new(|_| 0);
/// finished[Color::Green] += 1;
/// assert_eq!(finished[Color::Green], 1);
/// assert_eq!(finished[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; COLOR_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in rotation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
