//! The game facade: inbound requests in, events out.
//!
//! `LudoGame` owns one `GameState`, a `DiceSource` and an `EventSink`.
//! Each request runs to completion before returning:
//!
//! 1. `request_roll` rolls, lists movable pieces, and passes the turn if
//!    there are none.
//! 2. `request_move` moves the chosen piece, resolves captures, checks for
//!    a win, and hands the turn on (or back, after a used 6).
//! 3. `restart` puts every piece back in its yard.
//!
//! Rejected requests return an error and leave state untouched, except an
//! overshoot, which discards the roll and ends the turn.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{Color, FixedDice, GameConfig, Location, LudoGame};
//!
//! let mut game = LudoGame::with_dice(GameConfig::default(), FixedDice::new([6, 4]));
//!
//! let roll = game.request_roll().unwrap();
//! assert_eq!(roll.value, 6);
//! assert_eq!(roll.movable.as_slice(), &[0, 1, 2, 3]);
//!
//! game.request_move(Color::Red, 0).unwrap();
//! assert_eq!(game.state().location(Color::Red, 0), Location::OnPath(0));
//!
//! // A used 6 rolls again.
//! assert_eq!(game.active_color(), Color::Red);
//! ```

use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use crate::core::{
    Action, Color, DiceSource, GameConfig, GameRng, GameState, Location, LudoError, LudoResult,
    PIECES_PER_COLOR,
};
use crate::events::{EventLog, EventSink, GameEvent, Notice};
use crate::rules::turn::{self, StepEnd, TurnPhase};
use crate::rules::{self, MoveOutcome};

/// Result of a successful roll request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Color that rolled.
    pub color: Color,
    /// Value rolled, 1..=6.
    pub value: u8,
    /// Pieces that may use the roll. Empty means the turn was passed.
    pub movable: SmallVec<[u8; PIECES_PER_COLOR]>,
}

impl RollOutcome {
    /// The roll had no legal use and play moved on.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.movable.is_empty()
    }
}

/// A running Ludo game.
pub struct LudoGame<D = GameRng, S = EventLog> {
    config: GameConfig,
    state: GameState,
    dice: D,
    sink: S,
}

impl LudoGame {
    /// Create a game with seeded dice and a buffering event log.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let dice = GameRng::new(config.seed);
        Self::with_parts(config, dice, EventLog::new())
    }

    /// Branch this game: same position, independent dice, empty event log.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone(),
            dice: self.dice.fork(),
            sink: EventLog::new(),
        }
    }
}

impl<D: DiceSource> LudoGame<D, EventLog> {
    /// Create a game with the given dice and a buffering event log.
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        Self::with_parts(config, dice, EventLog::new())
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sink.drain()
    }
}

impl<D: DiceSource, S: EventSink> LudoGame<D, S> {
    /// Create a game from explicit parts.
    pub fn with_parts(config: GameConfig, dice: D, sink: S) -> Self {
        let state = GameState::new(config.first_color);
        let mut game = Self::from_state(config, state, dice, sink);
        game.sink.emit(GameEvent::TurnStarted(game.config.first_color));
        game.sink.emit(GameEvent::Notice(Notice::EnterWithSix));
        game
    }

    /// Resume play from an existing position.
    ///
    /// Emits nothing; the caller already knows the position it passed in.
    pub fn from_state(config: GameConfig, state: GameState, dice: D, sink: S) -> Self {
        Self {
            config,
            state,
            dice,
            sink,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        turn::phase(&self.state.turn)
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.state.turn.active_color
    }

    /// The roll waiting to be used, if any.
    #[must_use]
    pub fn pending_dice(&self) -> Option<u8> {
        self.state.turn.pending_dice
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.state.turn.winner
    }

    /// Pieces of `color` that could use `dice` in the current position.
    #[must_use]
    pub fn movable_pieces(&self, color: Color, dice: u8) -> SmallVec<[u8; PIECES_PER_COLOR]> {
        rules::movable_pieces(&self.state, color, dice)
    }

    #[must_use]
    pub fn has_won(&self, color: Color) -> bool {
        rules::has_won(&self.state, color)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Split the game back into its state, dice and sink.
    pub fn into_parts(self) -> (GameState, D, S) {
        (self.state, self.dice, self.sink)
    }

    // === Requests ===

    /// Roll the die for the active color.
    ///
    /// Refused while a roll is pending or after a win. When no piece can
    /// use the roll the turn passes to the next color, even on a 6.
    #[instrument(skip(self), fields(color = %self.state.turn.active_color))]
    pub fn request_roll(&mut self) -> LudoResult<RollOutcome> {
        let color = turn::check_roll(&self.state.turn).inspect_err(|err| warn!(%err, "roll refused"))?;

        let value = self.dice.roll();
        turn::begin_move(&mut self.state.turn, value);
        self.state.record(color, Action::Roll { value });

        let movable = rules::movable_pieces(&self.state, color, value);
        debug!(value, ?movable, "dice rolled");
        self.sink.emit(GameEvent::DiceRolled {
            color,
            value,
            movable: movable.clone(),
        });

        if movable.is_empty() {
            info!(value, "no legal move, passing");
            self.state.record(color, Action::Pass { dice: value });
            self.sink.emit(GameEvent::Notice(Notice::NoMovesAvailable { color, dice: value }));
            self.finish_step(color, StepEnd::Passed);
        }

        Ok(RollOutcome { color, value, movable })
    }

    /// Move `piece` of `color` by the pending roll.
    ///
    /// An overshooting piece forfeits the roll: the error is returned, the
    /// roll is discarded and play passes on. Any other refusal leaves the
    /// roll pending so another piece can be chosen.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, color: Color, piece: u8) -> LudoResult<MoveOutcome> {
        let dice = turn::check_move(&self.state.turn, color, piece)
            .inspect_err(|err| warn!(%err, "move refused"))?;

        let outcome = match rules::apply_move(&mut self.state, color, piece, dice) {
            Ok(outcome) => outcome,
            Err(err @ LudoError::Overshoot { .. }) => {
                warn!(%err, "overshoot, roll discarded");
                self.state.record(color, Action::Forfeit { piece, dice });
                self.sink.emit(GameEvent::Notice(Notice::Overshoot { color, piece, dice }));
                self.finish_step(color, StepEnd::Forfeited);
                return Err(err);
            }
            Err(err) => {
                warn!(%err, "move refused");
                return Err(err);
            }
        };

        self.state.record(
            color,
            Action::Move {
                piece,
                dice,
                from: outcome.from,
                to: outcome.to,
            },
        );
        self.sink.emit(GameEvent::piece_moved(color, piece, outcome.to));
        if let Location::OnPath(cell) = outcome.to {
            for &(victim, victim_piece) in &outcome.captured {
                self.sink.emit(GameEvent::Captured {
                    by: color,
                    color: victim,
                    piece: victim_piece,
                    cell,
                });
                self.sink.emit(GameEvent::piece_moved(victim, victim_piece, Location::Yard));
            }
        }

        if rules::has_won(&self.state, color) {
            info!(%color, "game won");
            turn::declare_winner(&mut self.state.turn, color);
            self.sink.emit(GameEvent::Won(color));
            return Ok(outcome);
        }

        self.finish_step(color, StepEnd::Moved { dice });
        Ok(outcome)
    }

    /// Start over: every piece to its yard, the first color to roll.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let displaced: Vec<(Color, u8)> = self
            .state
            .iter_pieces()
            .filter(|&(_, _, loc)| loc != Location::Yard)
            .map(|(color, piece, _)| (color, piece))
            .collect();

        let first = self.config.first_color;
        self.state.reset(first);
        info!(%first, "game restarted");

        for (color, piece) in displaced {
            self.sink.emit(GameEvent::piece_moved(color, piece, Location::Yard));
        }
        self.sink.emit(GameEvent::Notice(Notice::GameReset));
        self.sink.emit(GameEvent::TurnStarted(first));
    }

    fn finish_step(&mut self, color: Color, end: StepEnd) {
        let next = turn::end_step(&mut self.state.turn, end);
        if next == color {
            self.sink.emit(GameEvent::Notice(Notice::RollAgain(color)));
        } else {
            self.sink.emit(GameEvent::TurnStarted(next));
        }
    }
}
