//! Move legality and resolution.
//!
//! `destination` is the single source of truth for where a piece goes.
//! `movable_pieces` and `apply_move` both derive from it, so a piece is
//! listed as movable exactly when applying the move would succeed.
//!
//! ## Transition Table
//!
//! | From            | Condition                     | To                     |
//! |-----------------|-------------------------------|------------------------|
//! | `Yard`          | dice == 6                     | `OnPath(entry)`        |
//! | `OnPath(cell)`  | rel + dice <= 51              | `OnPath(entry + t)`    |
//! | `OnPath(cell)`  | rel + dice - 52 < 6           | `OnHomeLane(t - 52)`   |
//! | `OnHomeLane(s)` | s + dice < 6                  | `OnHomeLane(s + dice)` |
//! | `OnHomeLane(s)` | s + dice == 6                 | `Finished`             |
//!
//! Anything past the end of the home lane is an overshoot.

use smallvec::SmallVec;
use tracing::debug;

use super::capture::{resolve_captures, Captured};
use crate::core::{
    entry_offset, relative_progress, Color, GameState, Location, LudoError, LudoResult, HOME_LANE_LEN,
    PATH_LEN, PIECES_PER_COLOR,
};

/// Die value that releases a piece from the yard.
pub const RELEASE_ROLL: u8 = 6;

/// Why a piece cannot use a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// Still in the yard and the roll isn't a 6.
    NeedsSix,
    /// Already finished.
    Finished,
    /// The roll would carry the piece past the end of its home lane.
    Overshoot,
}

/// Compute where a piece of `color` at `from` lands after moving `dice` cells.
///
/// ```
/// use ludo_engine::core::{Color, Location};
/// use ludo_engine::rules::destination;
///
/// assert_eq!(destination(Color::Red, Location::OnPath(5), 50), Ok(Location::OnHomeLane(3)));
/// assert_eq!(destination(Color::Red, Location::OnHomeLane(4), 2), Ok(Location::Finished));
/// ```
pub fn destination(color: Color, from: Location, dice: u8) -> Result<Location, Refusal> {
    let lane = u16::from(HOME_LANE_LEN);
    let ring = u16::from(PATH_LEN);

    match from {
        Location::Yard if dice == RELEASE_ROLL => Ok(Location::OnPath(entry_offset(color))),
        Location::Yard => Err(Refusal::NeedsSix),
        Location::OnPath(cell) => {
            let target = u16::from(relative_progress(color, cell)) + u16::from(dice);
            if target < ring {
                let entry = u16::from(entry_offset(color));
                Ok(Location::OnPath(((entry + target) % ring) as u8))
            } else if target - ring < lane {
                Ok(Location::OnHomeLane((target - ring) as u8))
            } else {
                Err(Refusal::Overshoot)
            }
        }
        Location::OnHomeLane(step) => {
            let next = u16::from(step) + u16::from(dice);
            match next.cmp(&lane) {
                std::cmp::Ordering::Less => Ok(Location::OnHomeLane(next as u8)),
                std::cmp::Ordering::Equal => Ok(Location::Finished),
                std::cmp::Ordering::Greater => Err(Refusal::Overshoot),
            }
        }
        Location::Finished => Err(Refusal::Finished),
    }
}

/// Indices of `color`'s pieces that can legally use `dice`. May be empty.
pub fn movable_pieces(state: &GameState, color: Color, dice: u8) -> SmallVec<[u8; PIECES_PER_COLOR]> {
    state
        .pieces(color)
        .iter()
        .enumerate()
        .filter(|&(_, &loc)| destination(color, loc, dice).is_ok())
        .map(|(i, _)| i as u8)
        .collect()
}

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Location,
    pub to: Location,
    /// Opposing pieces sent back to their yards.
    pub captured: Captured,
}

/// Move one piece and resolve any capture on its landing cell.
///
/// Nothing is mutated unless the move is legal. Overshoots are reported
/// as `LudoError::Overshoot`; every other refusal as `IllegalMove`.
pub fn apply_move(state: &mut GameState, color: Color, piece: u8, dice: u8) -> LudoResult<MoveOutcome> {
    if usize::from(piece) >= PIECES_PER_COLOR {
        return Err(LudoError::IllegalMove { color, piece });
    }

    let from = state.location(color, piece);
    let to = destination(color, from, dice).map_err(|refusal| match refusal {
        Refusal::Overshoot => LudoError::Overshoot { color, piece, dice },
        Refusal::NeedsSix | Refusal::Finished => LudoError::IllegalMove { color, piece },
    })?;

    state.set_location(color, piece, to);
    debug!(%color, piece, dice, %from, %to, "piece moved");

    let captured = match to.path_cell() {
        Some(cell) => resolve_captures(state, color, cell),
        None => Captured::new(),
    };

    Ok(MoveOutcome { from, to, captured })
}
