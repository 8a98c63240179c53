//! Game state: piece locations and turn bookkeeping.
//!
//! ## GameState
//!
//! The single owned aggregate for one game:
//! - Location of every piece of every color
//! - Turn state (active color, pending roll, winner)
//! - Action history
//!
//! Nothing here is global. Multiple games can run side by side, and tests
//! can build any position directly with `set_location`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::color::{Color, ColorMap};
use super::location::{Location, PIECES_PER_COLOR};

/// Locations of one color's pieces, indexed by piece number.
pub type Pieces = [Location; PIECES_PER_COLOR];

/// Whose turn it is and what they may do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Color to act.
    pub active_color: Color,

    /// Roll waiting to be spent on a move, if any.
    pub pending_dice: Option<u8>,

    /// Set once a color has finished all pieces.
    pub winner: Option<Color>,

    /// Turn number (starts at 1). Advances when play passes to the next color.
    pub turn_number: u32,
}

impl TurnState {
    #[must_use]
    pub fn new(first_color: Color) -> Self {
        Self {
            active_color: first_color,
            pending_dice: None,
            winner: None,
            turn_number: 1,
        }
    }
}

/// Full game state.
///
/// Uses an `im` vector for history so cloning stays cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pieces: ColorMap<Pieces>,

    /// Turn bookkeeping.
    pub turn: TurnState,

    /// Resolved actions, oldest first.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a fresh game: every piece in its yard, `first_color` to roll.
    #[must_use]
    pub fn new(first_color: Color) -> Self {
        Self {
            pieces: ColorMap::with_value([Location::Yard; PIECES_PER_COLOR]),
            turn: TurnState::new(first_color),
            history: Vector::new(),
        }
    }

    // === Pieces ===

    /// Get a piece's location.
    ///
    /// # Panics
    ///
    /// If `piece` is not in 0..4. `LudoGame` refuses such indices before
    /// reaching here.
    #[must_use]
    pub fn location(&self, color: Color, piece: u8) -> Location {
        self.pieces[color][piece as usize]
    }

    /// Get all of a color's piece locations.
    #[must_use]
    pub fn pieces(&self, color: Color) -> &Pieces {
        &self.pieces[color]
    }

    /// Place a piece.
    ///
    /// # Panics
    ///
    /// If `piece` is not in 0..4 or the location is out of bounds.
    pub fn set_location(&mut self, color: Color, piece: u8, location: Location) {
        assert!(location.is_valid(), "Location out of bounds: {:?}", location);
        self.pieces[color][piece as usize] = location;
    }

    /// Iterate over every piece as (color, index, location).
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Color, u8, Location)> + '_ {
        self.pieces
            .iter()
            .flat_map(|(color, pieces)| pieces.iter().enumerate().map(move |(i, &loc)| (color, i as u8, loc)))
    }

    /// Pieces of other colors sitting on a ring cell.
    pub fn opponents_at(&self, color: Color, cell: u8) -> impl Iterator<Item = (Color, u8)> + '_ {
        self.iter_pieces()
            .filter(move |&(c, _, loc)| c != color && loc == Location::OnPath(cell))
            .map(|(c, i, _)| (c, i))
    }

    /// Number of a color's pieces that have finished.
    #[must_use]
    pub fn finished_count(&self, color: Color) -> usize {
        self.pieces[color].iter().filter(|loc| loc.is_finished()).count()
    }

    // === History ===

    /// Record an action in history, stamped with the current turn number.
    pub fn record(&mut self, color: Color, action: Action) {
        let turn = self.turn.turn_number;
        self.history.push_back(ActionRecord::new(color, action, turn));
    }

    // === Reset ===

    /// Return every piece to its yard and clear turn state and history.
    pub fn reset(&mut self, first_color: Color) {
        *self = Self::new(first_color);
    }
}
