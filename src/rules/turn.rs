//! Turn controller state machine.
//!
//! ```text
//! AwaitingRoll(c) --roll--> AwaitingMove(c, d)
//! AwaitingMove(c, d) --move, d == 6--> AwaitingRoll(c)
//! AwaitingMove(c, d) --move, d != 6--> AwaitingRoll(next(c))
//! AwaitingMove(c, d) --no legal move--> AwaitingRoll(next(c))   (even for a 6)
//! AwaitingMove(c, d) --overshoot--> AwaitingRoll(next(c))
//! any --c finishes all pieces--> Won(c)
//! ```
//!
//! The phase is derived from `TurnState` rather than stored, so the two
//! can never disagree.

use serde::{Deserialize, Serialize};

use super::movement::RELEASE_ROLL;
use crate::core::{Color, InvalidReason, LudoError, LudoResult, TurnState, PIECES_PER_COLOR};

/// Where the turn machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// `color` must roll.
    AwaitingRoll(Color),
    /// `color` rolled `dice` and must pick a piece.
    AwaitingMove { color: Color, dice: u8 },
    /// `color` finished all pieces. Only a restart continues play.
    Won(Color),
}

/// How a turn-step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEnd {
    /// A piece moved using `dice`.
    Moved { dice: u8 },
    /// No piece could use the roll.
    Passed,
    /// The chosen move overshot home and the roll was discarded.
    Forfeited,
}

impl StepEnd {
    /// A 6 that was actually used earns another roll.
    #[must_use]
    pub const fn grants_extra_roll(self) -> bool {
        matches!(self, StepEnd::Moved { dice: RELEASE_ROLL })
    }
}

/// Current phase of the turn machine.
#[must_use]
pub fn phase(turn: &TurnState) -> TurnPhase {
    match (turn.winner, turn.pending_dice) {
        (Some(color), _) => TurnPhase::Won(color),
        (None, Some(dice)) => TurnPhase::AwaitingMove {
            color: turn.active_color,
            dice,
        },
        (None, None) => TurnPhase::AwaitingRoll(turn.active_color),
    }
}

/// Check a roll may happen now and return the color that will roll.
pub fn check_roll(turn: &TurnState) -> LudoResult<Color> {
    match phase(turn) {
        TurnPhase::AwaitingRoll(color) => Ok(color),
        TurnPhase::AwaitingMove { .. } => Err(LudoError::invalid(InvalidReason::RollPending)),
        TurnPhase::Won(color) => Err(LudoError::invalid(InvalidReason::GameWon(color))),
    }
}

/// Check `color` may move `piece` now and return the pending roll.
pub fn check_move(turn: &TurnState, color: Color, piece: u8) -> LudoResult<u8> {
    let dice = match phase(turn) {
        TurnPhase::Won(winner) => return Err(LudoError::invalid(InvalidReason::GameWon(winner))),
        _ if color != turn.active_color => {
            return Err(LudoError::invalid(InvalidReason::NotYourTurn(turn.active_color)))
        }
        TurnPhase::AwaitingRoll(_) => return Err(LudoError::invalid(InvalidReason::NoRollPending)),
        TurnPhase::AwaitingMove { dice, .. } => dice,
    };

    if usize::from(piece) >= PIECES_PER_COLOR {
        return Err(LudoError::IllegalMove { color, piece });
    }

    Ok(dice)
}

/// Record a fresh roll for the active color.
pub fn begin_move(turn: &mut TurnState, dice: u8) {
    turn.pending_dice = Some(dice);
}

/// Close the current turn-step and return the color to roll next.
///
/// Clears the pending roll. Play stays with the active color only when a
/// 6 was used for a move; otherwise it passes on in rotation order.
pub fn end_step(turn: &mut TurnState, end: StepEnd) -> Color {
    turn.pending_dice = None;
    if !end.grants_extra_roll() {
        turn.active_color = turn.active_color.next();
        turn.turn_number += 1;
    }
    turn.active_color
}

/// Mark `color` as the winner, closing the game.
pub fn declare_winner(turn: &mut TurnState, color: Color) {
    turn.winner = Some(color);
    turn.pending_dice = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let turn = TurnState::new(Color::Red);
        assert_eq!(phase(&turn), TurnPhase::AwaitingRoll(Color::Red));
        assert_eq!(check_roll(&turn), Ok(Color::Red));
    }

    #[test]
    fn test_roll_then_move_phase() {
        let mut turn = TurnState::new(Color::Blue);
        begin_move(&mut turn, 4);

        assert_eq!(phase(&turn), TurnPhase::AwaitingMove { color: Color::Blue, dice: 4 });
        assert_eq!(check_roll(&turn), Err(LudoError::invalid(InvalidReason::RollPending)));
        assert_eq!(check_move(&turn, Color::Blue, 2), Ok(4));
    }

    #[test]
    fn test_move_checks() {
        let mut turn = TurnState::new(Color::Red);

        assert_eq!(
            check_move(&turn, Color::Red, 0),
            Err(LudoError::invalid(InvalidReason::NoRollPending))
        );
        assert_eq!(
            check_move(&turn, Color::Green, 0),
            Err(LudoError::invalid(InvalidReason::NotYourTurn(Color::Red)))
        );

        begin_move(&mut turn, 3);
        assert_eq!(
            check_move(&turn, Color::Red, 7),
            Err(LudoError::IllegalMove { color: Color::Red, piece: 7 })
        );
    }

    #[test]
    fn test_six_used_keeps_color() {
        let mut turn = TurnState::new(Color::Green);
        begin_move(&mut turn, 6);

        let next = end_step(&mut turn, StepEnd::Moved { dice: 6 });

        assert_eq!(next, Color::Green);
        assert_eq!(turn.turn_number, 1);
        assert_eq!(phase(&turn), TurnPhase::AwaitingRoll(Color::Green));
    }

    #[test]
    fn test_other_rolls_pass_on() {
        let mut turn = TurnState::new(Color::Yellow);
        begin_move(&mut turn, 2);

        let next = end_step(&mut turn, StepEnd::Moved { dice: 2 });

        assert_eq!(next, Color::Red);
        assert_eq!(turn.turn_number, 2);
        assert_eq!(turn.pending_dice, None);
    }

    #[test]
    fn test_pass_on_six_still_rotates() {
        let mut turn = TurnState::new(Color::Red);
        begin_move(&mut turn, 6);

        assert_eq!(end_step(&mut turn, StepEnd::Passed), Color::Blue);
    }

    #[test]
    fn test_forfeit_rotates() {
        let mut turn = TurnState::new(Color::Blue);
        begin_move(&mut turn, 3);

        assert_eq!(end_step(&mut turn, StepEnd::Forfeited), Color::Green);
    }

    #[test]
    fn test_won_blocks_rolls_and_moves() {
        let mut turn = TurnState::new(Color::Red);
        declare_winner(&mut turn, Color::Red);

        assert_eq!(phase(&turn), TurnPhase::Won(Color::Red));
        assert_eq!(
            check_roll(&turn),
            Err(LudoError::invalid(InvalidReason::GameWon(Color::Red)))
        );
        assert_eq!(
            check_move(&turn, Color::Red, 0),
            Err(LudoError::invalid(InvalidReason::GameWon(Color::Red)))
        );
    }
}
