use crate::draughts::Board;
use derive_more::Display;
use std::ops::{Not, RangeInclusive};

/// One of the two sides, also used for the shade of a [`Square`][`crate::draughts::Square`].
///
/// The light side sets up on the lowest rows and advances towards increasing rows,
/// the dark side sets up on the highest rows and advances towards decreasing rows.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Color {
    /// The row increment of a step towards the opponent's back rank.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// The row on which men of this color are promoted.
    #[inline(always)]
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Light => Board::SIZE - 1,
            Color::Dark => 0,
        }
    }

    /// The rows this color's men occupy at the start of the game.
    #[inline(always)]
    pub fn home_rows(self) -> RangeInclusive<i8> {
        match self {
            Color::Light => 0..=2,
            Color::Dark => Board::SIZE - 3..=Board::SIZE - 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}
