use crate::draughts::{Board, Coord, Piece};
use crate::rules::Directions;
use derive_more::{Display, Error};

/// Read access to who stands where.
///
/// Lets a step be classified against the real [`Board`] or against a simulated one.
pub trait Occupancy {
    /// The [`Piece`] at a valid [`Coord`], if any.
    fn occupant_at(&self, at: Coord) -> Option<Piece>;
}

impl Occupancy for Board {
    #[inline(always)]
    fn occupant_at(&self, at: Coord) -> Option<Piece> {
        self[at].occupant()
    }
}

/// A legal single step of a piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Step {
    /// A one square diagonal move onto an empty square.
    #[display(fmt = "simple move")]
    Simple,
    /// A two square diagonal jump over an opponent's piece standing at the given [`Coord`].
    #[display(fmt = "capture at `{_0}`")]
    Capture(Coord),
}

/// The reason why a single step is illegal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalStep {
    #[display(fmt = "coordinate `{_0}` is out of range")]
    OutOfRange(#[error(not(source))] Coord),
    #[display(fmt = "no piece at `{_0}`")]
    Vacant(#[error(not(source))] Coord),
    #[display(fmt = "square `{_0}` is occupied")]
    Occupied(#[error(not(source))] Coord),
    #[display(fmt = "`{_0}` to `{_1}` is neither a diagonal step nor a diagonal jump")]
    Unreachable(Coord, Coord),
    #[display(fmt = "a {} {} may not go from `{_1}` to `{_2}`", "_0.color()", "_0.rank()")]
    WrongDirection(Piece, Coord, Coord),
    #[display(fmt = "no opponent's piece to capture at `{_0}`")]
    NothingToCapture(#[error(not(source))] Coord),
}

/// Classifies the step of the piece at `from` onto `to`.
///
/// Checks, in order, that both coordinates are valid, that `from` is occupied and `to` is not,
/// and finally that the piece may legally step or jump in that direction.
pub fn classify<O: Occupancy + ?Sized>(
    board: &O,
    from: Coord,
    to: Coord,
) -> Result<Step, IllegalStep> {
    for at in [from, to] {
        if !at.is_valid() {
            return Err(IllegalStep::OutOfRange(at));
        }
    }

    let Some(piece) = board.occupant_at(from) else {
        return Err(IllegalStep::Vacant(from));
    };

    if board.occupant_at(to).is_some() {
        return Err(IllegalStep::Occupied(to));
    }

    let (dr, dc) = to - from;
    let direction = match Directions::toward(dr, dc) {
        Some(d) if dr.unsigned_abs() <= 2 => d,
        _ => return Err(IllegalStep::Unreachable(from, to)),
    };

    if !Directions::of(piece).contains(direction) {
        return Err(IllegalStep::WrongDirection(piece, from, to));
    }

    if dr.unsigned_abs() == 1 {
        return Ok(Step::Simple);
    }

    let at = from.midpoint(to);
    match board.occupant_at(at) {
        Some(p) if p.color() != piece.color() => Ok(Step::Capture(at)),
        _ => Err(IllegalStep::NothingToCapture(at)),
    }
}
