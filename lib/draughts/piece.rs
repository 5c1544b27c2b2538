use crate::draughts::{Color, Rank};
use std::fmt::{self, Display, Formatter, Write};

/// A draughts piece of a certain [`Color`] and [`Rank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    color: Color,
    rank: Rank,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Color`] and [`Rank`].
    #[inline(always)]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    /// An unpromoted piece of the given [`Color`].
    #[inline(always)]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, Rank::Man)
    }

    /// A promoted piece of the given [`Color`].
    #[inline(always)]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Rank::King)
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Rank`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Whether this piece has been promoted.
    #[inline(always)]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// This piece promoted to [`Rank::King`].
    ///
    /// Promoting a king is a no-op.
    #[inline(always)]
    pub const fn promote(self) -> Self {
        Piece::king(self.color)
    }
}

/// Prints the color letter, upper case for light and lower case for dark.
///
/// Kings print the same as men, use [`Piece::rank`] to tell them apart.
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::Light => f.write_char('L'),
            Color::Dark => f.write_char('d'),
        }
    }
}
