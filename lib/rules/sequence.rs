use crate::draughts::{Board, Coord, ParseCoordError, Piece};
use crate::rules::{classify, IllegalStep, Occupancy, Step};
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::str::FromStr;
use tracing::{instrument, trace};

/// The path of a single piece across one turn.
///
/// The first [`Coord`] is where the piece stands, the rest are the squares it visits in order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveSequence(Vec<Coord>);

impl MoveSequence {
    /// Constructs [`MoveSequence`] from at least two coordinates.
    pub fn new<I>(coords: I) -> Result<Self, Rejection>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let coords: Vec<Coord> = coords.into_iter().map(Into::into).collect();

        if coords.len() < 2 {
            Err(Rejection::TooShort(coords.len()))
        } else {
            Ok(MoveSequence(coords))
        }
    }

    /// Where the piece starts.
    #[inline(always)]
    pub fn origin(&self) -> Coord {
        self.0[0]
    }

    /// Where the piece ends.
    #[inline(always)]
    pub fn destination(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// An iterator over each step as a pair of origin and destination.
    pub fn steps(&self) -> impl ExactSizeIterator<Item = (Coord, Coord)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('-')?;
            }

            fmt::Display::fmt(c, f)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`MoveSequence`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveSequenceError {
    #[display(fmt = "failed to parse move sequence")]
    InvalidCoord(ParseCoordError),
    #[display(fmt = "failed to parse move sequence, expected at least two coordinates")]
    #[from(ignore)]
    TooShort,
}

/// Parses coordinates separated by `-` or `x`, as in `5,2x3,4x1,2`.
impl FromStr for MoveSequence {
    type Err = ParseMoveSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(['-', 'x'])
            .map(Coord::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        MoveSequence::new(coords).map_err(|_| ParseMoveSequenceError::TooShort)
    }
}

/// The reason why a [`MoveSequence`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Rejection {
    #[display(fmt = "expected at least two coordinates, got {_0}")]
    TooShort(#[error(not(source))] usize),
    #[display(fmt = "no piece at `{_0}`")]
    NoPieceAtOrigin(#[error(not(source))] Coord),
    #[display(fmt = "step {index} is illegal")]
    IllegalStep {
        index: usize,
        #[error(source)]
        reason: IllegalStep,
    },
    #[display(fmt = "step {index} follows a simple move")]
    MoveAfterSimpleMove { index: usize },
    #[display(fmt = "step {index} is a simple move after a capture")]
    SimpleMoveAfterCapture { index: usize },
    #[display(fmt = "step {index} captures `{at}` a second time")]
    DuplicateCapture { index: usize, at: Coord },
}

/// The outcome of a validated [`MoveSequence`], ready to be committed to the [`Board`].
///
/// Only valid for the exact board it was validated against.
#[derive(Debug, Eq, PartialEq)]
pub struct MoveEffect {
    origin: Coord,
    destination: Coord,
    captured: Vec<Coord>,
    piece: Piece,
}

impl MoveEffect {
    /// Where the moved piece started.
    #[inline(always)]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Where the moved piece lands.
    #[inline(always)]
    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// The squares of the captured pieces, in the order they were jumped.
    #[inline(always)]
    pub fn captured(&self) -> &[Coord] {
        &self.captured
    }

    /// The piece moved, as it stood before promotion.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Whether any piece was captured.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// The [`Board`] as seen by a piece part way through its [`MoveSequence`].
///
/// The piece has left its origin and stands at `position`, captured pieces are still in place.
struct Trace<'a> {
    board: &'a Board,
    origin: Coord,
    position: Coord,
    piece: Piece,
}

impl Occupancy for Trace<'_> {
    #[inline(always)]
    fn occupant_at(&self, at: Coord) -> Option<Piece> {
        if at == self.position {
            Some(self.piece)
        } else if at == self.origin {
            None
        } else {
            self.board.occupant_at(at)
        }
    }
}

/// Validates a [`MoveSequence`] without touching the [`Board`].
///
/// A turn is either a single simple move or a chain of captures, each jump starting where the
/// previous one landed. Steps are indexed from 1.
#[instrument(level = "trace", skip(board), err)]
pub fn validate(board: &Board, sequence: &MoveSequence) -> Result<MoveEffect, Rejection> {
    let origin = sequence.origin();
    let Some(piece) = board.occupant(origin).ok().flatten() else {
        return Err(Rejection::NoPieceAtOrigin(origin));
    };

    let mut trace = Trace {
        board,
        origin,
        position: origin,
        piece,
    };

    let mut captured = Vec::with_capacity(sequence.steps().len());
    for (index, (from, to)) in (1..).zip(sequence.steps()) {
        debug_assert_eq!(from, trace.position);

        if index > 1 && captured.is_empty() {
            return Err(Rejection::MoveAfterSimpleMove { index });
        }

        match classify(&trace, from, to) {
            Err(reason) => return Err(Rejection::IllegalStep { index, reason }),
            Ok(Step::Simple) if index > 1 => {
                return Err(Rejection::SimpleMoveAfterCapture { index })
            }
            Ok(Step::Simple) => {}
            Ok(Step::Capture(at)) if captured.contains(&at) => {
                return Err(Rejection::DuplicateCapture { index, at })
            }
            Ok(Step::Capture(at)) => captured.push(at),
        }

        trace!(index, %from, %to, captures = captured.len());
        trace.position = to;
    }

    Ok(MoveEffect {
        origin,
        destination: trace.position,
        captured,
        piece,
    })
}

#[cfg(test)]
impl Board {
    /// Sets up a chain of jumps for `piece` starting at `from`, one jump per entry of `turns`.
    ///
    /// Each turn picks one of the directions available to the piece. Turns that would leave the
    /// board or run into the chain itself are skipped. Every jumped square receives an opponent's
    /// man and every landing square is cleared. Returns the path and the jumped squares in order.
    pub(crate) fn arrange_jumps(
        &mut self,
        from: Coord,
        piece: Piece,
        turns: &[usize],
    ) -> (Vec<Coord>, Vec<Coord>) {
        let deltas: Vec<_> = crate::rules::Directions::of(piece).deltas().collect();
        let mut path = vec![from];
        let mut jumped = Vec::new();

        for &t in turns {
            let (dr, dc) = deltas[t % deltas.len()];
            let at = path[path.len() - 1];
            let over = at.offset(dr, dc);
            let to = at.offset(2 * dr, 2 * dc);

            if to.is_valid()
                && !path.contains(&over)
                && !jumped.contains(&over)
                && !jumped.contains(&to)
            {
                jumped.push(over);
                path.push(to);
            }
        }

        for &at in &jumped {
            self.set(at, Some(Piece::man(!piece.color())));
        }

        for &at in &path {
            self.set(at, None);
        }

        self.set(from, Some(piece));
        (path, jumped)
    }
}
