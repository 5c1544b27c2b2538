use crate::draughts::{Color, Piece, Rank};
use bitflags::bitflags;

bitflags! {
    /// A set of diagonal directions, named after how they change the row and column.
    ///
    /// Rows grow downwards, in the same order the [`Board`][`crate::draughts::Board`] is printed.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct Directions: u8 {
        const UP_LEFT =     0b0001;
        const UP_RIGHT =    0b0010;
        const DOWN_LEFT =   0b0100;
        const DOWN_RIGHT =  0b1000;
    }
}

impl Directions {
    /// The directions in which a piece of the given [`Rank`] and [`Color`] may move or capture.
    ///
    /// Men only advance towards the opponent's back rank, kings go anywhere.
    #[inline(always)]
    pub fn allowed(rank: Rank, color: Color) -> Self {
        match (rank, color.forward()) {
            (Rank::King, _) => Directions::all(),
            (Rank::Man, 1) => Directions::DOWN_LEFT | Directions::DOWN_RIGHT,
            (Rank::Man, _) => Directions::UP_LEFT | Directions::UP_RIGHT,
        }
    }

    /// The directions available to a [`Piece`].
    #[inline(always)]
    pub fn of(piece: Piece) -> Self {
        Self::allowed(piece.rank(), piece.color())
    }

    /// The single direction of a step by the given row and column increments, if diagonal.
    #[inline(always)]
    pub fn toward(dr: i8, dc: i8) -> Option<Self> {
        match (dr.signum(), dc.signum()) {
            _ if dr.unsigned_abs() != dc.unsigned_abs() => None,
            (-1, -1) => Some(Directions::UP_LEFT),
            (-1, 1) => Some(Directions::UP_RIGHT),
            (1, -1) => Some(Directions::DOWN_LEFT),
            (1, 1) => Some(Directions::DOWN_RIGHT),
            _ => None,
        }
    }
}

#[cfg(test)]
impl Directions {
    /// The unit row and column increments of each direction in this set.
    pub(crate) fn deltas(self) -> impl Iterator<Item = (i8, i8)> {
        [(-1, -1), (-1, 1), (1, -1), (1, 1)]
            .into_iter()
            .filter(move |&(dr, dc)| Self::toward(dr, dc).is_some_and(|d| self.contains(d)))
    }
}
