use crate::draughts::{Board, Coord, Piece};
use crate::rules::{promote, validate, MoveEffect, MoveSequence, Rejection};
use tracing::{debug, instrument};

/// Commits a [`MoveEffect`] to the [`Board`] and promotes the moved piece if it qualifies.
///
/// The effect must have been validated against this very board, no checks are repeated here.
/// Returns the piece as it stands on its destination.
pub fn execute(board: &mut Board, effect: &MoveEffect) -> Piece {
    board.set(effect.origin(), None);

    for &at in effect.captured() {
        let captured = board.set(at, None);
        debug_assert!(captured.is_some_and(|p| p.color() != effect.piece().color()));
    }

    board.set(effect.destination(), Some(effect.piece()));

    debug!(
        origin = %effect.origin(),
        destination = %effect.destination(),
        captures = effect.captured().len(),
    );

    if promote(board, effect.destination()) {
        effect.piece().promote()
    } else {
        effect.piece()
    }
}

impl Board {
    /// Plays a [`MoveSequence`] if legal, otherwise returns the reason why not.
    ///
    /// The board is left untouched if the sequence is rejected.
    #[instrument(level = "trace", skip(self), err)]
    pub fn play(&mut self, sequence: &MoveSequence) -> Result<MoveEffect, Rejection> {
        let effect = validate(self, sequence)?;
        execute(self, &effect);
        Ok(effect)
    }
}

/// Plays the sequence of coordinates on the [`Board`], returning whether it was legal.
///
/// See [`Board::play`] for the reason of a rejection.
pub fn apply_move_sequence<I>(board: &mut Board, coords: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Coord>,
{
    MoveSequence::new(coords)
        .and_then(|s| board.play(&s))
        .is_ok()
}
