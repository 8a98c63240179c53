//! Win detection.

use crate::core::{Color, GameState, PIECES_PER_COLOR};

/// True iff every piece of `color` has finished.
#[must_use]
pub fn has_won(state: &GameState, color: Color) -> bool {
    state.finished_count(color) == PIECES_PER_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Location;

    #[test]
    fn test_no_winner_at_start() {
        let state = GameState::new(Color::Red);
        assert!(Color::all().all(|c| !has_won(&state, c)));
    }

    #[test]
    fn test_three_finished_is_not_a_win() {
        let mut state = GameState::new(Color::Red);
        for piece in 0..3 {
            state.set_location(Color::Green, piece, Location::Finished);
        }
        state.set_location(Color::Green, 3, Location::OnHomeLane(5));

        assert!(!has_won(&state, Color::Green));
    }

    #[test]
    fn test_all_finished_wins() {
        let mut state = GameState::new(Color::Red);
        for piece in 0..4 {
            state.set_location(Color::Green, piece, Location::Finished);
        }

        assert!(has_won(&state, Color::Green));
        assert!(!has_won(&state, Color::Red));
    }
}
