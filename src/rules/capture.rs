//! Capture resolution.
//!
//! Landing on a ring cell sends every opposing piece on that cell back to
//! its yard. Pieces of the mover's own color are never captured, so a
//! color may stack several pieces on one cell. Yards, home lanes and
//! finished pieces are never on the ring and so are always safe.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Color, GameState, Location};

/// Pieces sent home by a capture, as (color, piece index).
pub type Captured = SmallVec<[(Color, u8); 4]>;

/// Evict opposing pieces from ring cell `cell` after `mover` lands there.
pub fn resolve_captures(state: &mut GameState, mover: Color, cell: u8) -> Captured {
    let captured: Captured = state.opponents_at(mover, cell).collect();

    for &(color, piece) in &captured {
        state.set_location(color, piece, Location::Yard);
        debug!(%mover, %color, piece, cell, "piece captured");
    }

    captured
}
