use crate::draughts::{Board, Color};
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A pair of row and column indices.
///
/// Any pair is representable, only those in the range `(0..8)` refer to a square on the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{row},{col}")]
pub struct Coord {
    #[cfg_attr(test, strategy(0..Board::SIZE))]
    pub row: i8,
    #[cfg_attr(test, strategy(0..Board::SIZE))]
    pub col: i8,
}

impl Coord {
    /// Constructs [`Coord`] from a pair of row and column.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Whether this coordinate lies on the [`Board`].
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        (0..Board::SIZE).contains(&self.row) && (0..Board::SIZE).contains(&self.col)
    }

    /// The shade of the square at this coordinate.
    ///
    /// Squares whose row and column add up to an odd number are [`Color::Dark`].
    #[inline(always)]
    pub fn shade(&self) -> Color {
        if (self.row ^ self.col) & 1 == 1 {
            Color::Dark
        } else {
            Color::Light
        }
    }

    /// The coordinate displaced by the given row and column increments.
    ///
    /// Saturates at the bounds of `i8`, which never lie on the [`Board`].
    #[inline(always)]
    pub fn offset(self, dr: i8, dc: i8) -> Self {
        Coord::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// The coordinate half way between `self` and `other`, rounded towards `self`.
    #[inline(always)]
    pub fn midpoint(self, other: Self) -> Self {
        let (dr, dc) = other - self;
        self.offset(dr / 2, dc / 2)
    }
}

impl From<(i8, i8)> for Coord {
    #[inline(always)]
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

/// The row and column increments that lead from `rhs` to `self`.
impl Sub for Coord {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (self.row.saturating_sub(rhs.row), self.col.saturating_sub(rhs.col))
    }
}

/// The reason why parsing [`Coord`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse coordinate, expected `row,col`")]
pub struct ParseCoordError;

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseCoordError)?;
        let row = row.trim().parse().map_err(|_| ParseCoordError)?;
        let col = col.trim().parse().map_err(|_| ParseCoordError)?;
        Ok(Coord::new(row, col))
    }
}
