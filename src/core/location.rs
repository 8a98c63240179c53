//! Piece locations and board path geometry.
//!
//! The board is indexing only: a 52-cell shared ring that every color
//! traverses, a per-color entry cell on that ring, and a private 6-cell
//! home lane per color. The engine never deals in screen coordinates.
//!
//! ## Path Arithmetic
//!
//! A piece's progress along the ring is measured relative to its color's
//! entry cell:
//!
//! ```text
//! relative = (cell - entry_offset(color) + 52) % 52
//! ```
//!
//! Relative positions 0..=51 stay on the ring. Moving past relative 51
//! enters the home lane at step `relative - 52`.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Number of cells on the shared ring.
pub const PATH_LEN: u8 = 52;

/// Number of cells in each color's home lane.
pub const HOME_LANE_LEN: u8 = 6;

/// Spacing between consecutive colors' entry cells.
pub const ENTRY_SPACING: u8 = PATH_LEN / 4;

/// Pieces owned by each color.
pub const PIECES_PER_COLOR: usize = 4;

/// The ring cell where `color` enters the shared path: 0, 13, 26, 39.
#[must_use]
pub const fn entry_offset(color: Color) -> u8 {
    color.index() as u8 * ENTRY_SPACING
}

/// Progress of a ring cell relative to `color`'s entry cell, in 0..52.
#[must_use]
pub const fn relative_progress(color: Color, cell: u8) -> u8 {
    ((cell as u16 + PATH_LEN as u16 - entry_offset(color) as u16) % PATH_LEN as u16) as u8
}

/// Where a piece currently is.
///
/// A piece is in exactly one of these states at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Waiting to enter the board. Left only by rolling a 6.
    #[default]
    Yard,
    /// On the shared ring, absolute cell 0..52.
    OnPath(u8),
    /// In the owner's private home lane, step 0..6.
    OnHomeLane(u8),
    /// Completed the home lane. Inert for the rest of the game.
    Finished,
}

impl Location {
    /// Check the location's payload is within board bounds.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Location::Yard | Location::Finished => true,
            Location::OnPath(cell) => cell < PATH_LEN,
            Location::OnHomeLane(step) => step < HOME_LANE_LEN,
        }
    }

    /// The shared ring cell, if the piece is on the ring.
    #[must_use]
    pub const fn path_cell(self) -> Option<u8> {
        match self {
            Location::OnPath(cell) => Some(cell),
            _ => None,
        }
    }

    /// Pieces here can be captured.
    #[must_use]
    pub const fn is_capturable(self) -> bool {
        matches!(self, Location::OnPath(_))
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Location::Finished)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Yard => write!(f, "yard"),
            Location::OnPath(cell) => write!(f, "path {}", cell),
            Location::OnHomeLane(step) => write!(f, "home lane {}", step),
            Location::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_offsets() {
        assert_eq!(entry_offset(Color::Red), 0);
        assert_eq!(entry_offset(Color::Blue), 13);
        assert_eq!(entry_offset(Color::Green), 26);
        assert_eq!(entry_offset(Color::Yellow), 39);
    }

    #[test]
    fn test_relative_progress_wraps() {
        assert_eq!(relative_progress(Color::Red, 5), 5);
        assert_eq!(relative_progress(Color::Blue, 13), 0);
        assert_eq!(relative_progress(Color::Blue, 12), 51);
        assert_eq!(relative_progress(Color::Yellow, 0), 13);
    }

    #[test]
    fn test_location_validity() {
        assert!(Location::Yard.is_valid());
        assert!(Location::OnPath(51).is_valid());
        assert!(!Location::OnPath(52).is_valid());
        assert!(Location::OnHomeLane(5).is_valid());
        assert!(!Location::OnHomeLane(6).is_valid());
        assert!(Location::Finished.is_valid());
    }

    #[test]
    fn test_only_path_is_capturable() {
        assert!(Location::OnPath(7).is_capturable());
        assert!(!Location::Yard.is_capturable());
        assert!(!Location::OnHomeLane(0).is_capturable());
        assert!(!Location::Finished.is_capturable());
    }

    #[test]
    fn test_location_serialization() {
        let loc = Location::OnHomeLane(3);
        let json = serde_json::to_string(&loc).unwrap();
        let deserialized: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, deserialized);
    }
}
