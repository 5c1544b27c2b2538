use crate::draughts::{Color, Coord, Piece, Square};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;

/// Represents a [`Coord`] that does not lie on the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "coordinate `{_0}` is out of range")]
pub struct OutOfRangeError(#[error(not(source))] pub Coord);

/// The draughts board.
///
/// Performs no legality checks of its own, see [`Board::play`] for that.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

/// The standard starting placement, twelve men per side on the dark squares.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for c in [Color::Light, Color::Dark] {
            for at in Board::coords().filter(|at| c.home_rows().contains(&at.row)) {
                if at.shade() == Color::Dark {
                    board.set(at, Some(Piece::man(c)));
                }
            }
        }

        board
    }
}

impl Board {
    /// The number of rows and columns.
    pub const SIZE: i8 = 8;

    /// The board with the standard starting placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|row| {
                std::array::from_fn(|col| Square::new(Coord::new(row as _, col as _).shade()))
            }),
        }
    }

    /// An iterator over all coordinates on the board, row by row.
    pub fn coords() -> impl DoubleEndedIterator<Item = Coord> {
        (0..Board::SIZE).flat_map(|row| (0..Board::SIZE).map(move |col| Coord::new(row, col)))
    }

    #[inline(always)]
    fn check(at: Coord) -> Result<Coord, OutOfRangeError> {
        if at.is_valid() {
            Ok(at)
        } else {
            Err(OutOfRangeError(at))
        }
    }

    /// The [`Square`] at the given [`Coord`].
    pub fn square(&self, at: Coord) -> Result<&Square, OutOfRangeError> {
        Ok(&self[Self::check(at)?])
    }

    /// The [`Piece`] at the given [`Coord`], if any.
    pub fn occupant(&self, at: Coord) -> Result<Option<Piece>, OutOfRangeError> {
        Ok(self.square(at)?.occupant())
    }

    /// Puts a [`Piece`] at the given [`Coord`], returning the one it displaced, if any.
    ///
    /// Any square is accepted, even a light one.
    pub fn place(&mut self, at: Coord, piece: Piece) -> Result<Option<Piece>, OutOfRangeError> {
        Ok(self.set(Self::check(at)?, Some(piece)))
    }

    /// Removes the [`Piece`] at the given [`Coord`], if any.
    pub fn clear(&mut self, at: Coord) -> Result<Option<Piece>, OutOfRangeError> {
        Ok(self.set(Self::check(at)?, None))
    }

    /// The squares directly above, below, left and right of the given [`Coord`].
    pub fn adjacent(&self, at: Coord) -> Result<ArrayVec<Square, 4>, OutOfRangeError> {
        let at = Self::check(at)?;

        Ok([(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(|(dr, dc)| at.offset(dr, dc))
            .filter(Coord::is_valid)
            .map(|c| self[c])
            .collect())
    }

    /// An iterator over all pieces on the board and where they stand.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Board::coords().filter_map(|at| Some((at, self[at].occupant()?)))
    }

    /// The number of pieces of the given [`Color`].
    pub fn count(&self, c: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color() == c).count()
    }

    /// The text grid used for display, see the [`Display`][`fmt::Display`] implementation.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Overwrites the occupant of a valid [`Coord`].
    #[inline(always)]
    pub(crate) fn set(&mut self, at: Coord, occupant: Option<Piece>) -> Option<Piece> {
        debug_assert!(at.is_valid());
        self.squares[at.row as usize][at.col as usize].replace(occupant)
    }
}

/// Retrieves the [`Square`] at a given [`Coord`].
///
/// # Panics
///
/// Panics if the [`Coord`] is not valid, see [`Board::square`] for the fallible version.
impl Index<Coord> for Board {
    type Output = Square;

    #[inline(always)]
    fn index(&self, at: Coord) -> &Self::Output {
        assert!(at.is_valid(), "{}", OutOfRangeError(at));
        &self.squares[at.row as usize][at.col as usize]
    }
}

/// A fixed width grid headed by column indices, each row prefixed by its index.
///
/// Empty light squares print blank, empty dark squares print `.`, occupied squares print the [`Piece`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for col in 0..Board::SIZE {
            write!(f, " {col}")?;
        }

        f.write_char('\n')?;

        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{row} ")?;

            for sq in squares {
                match (sq.occupant(), sq.shade()) {
                    (Some(p), _) => write!(f, "{p} ")?,
                    (None, Color::Light) => f.write_str("  ")?,
                    (None, Color::Dark) => f.write_str(". ")?,
                }
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let dark = Board::coords().filter(|at| at.shade() == Color::Dark).count();
        proptest::collection::vec(proptest::option::weighted(0.5, any::<Piece>()), dark)
            .prop_map(|occupants| {
                let mut board = Board::empty();
                let dark = Board::coords().filter(|at| at.shade() == Color::Dark);
                for (at, occupant) in dark.zip(occupants) {
                    board.set(at, occupant);
                }

                board
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draughts::Rank;
    use test_strategy::proptest;

    #[proptest]
    fn shade_is_dark_iff_row_plus_col_is_odd(b: Board, at: Coord) {
        assert_eq!(b[at].shade() == Color::Dark, (at.row + at.col) % 2 == 1);
    }

    #[proptest]
    fn pieces_only_stand_on_dark_squares(b: Board) {
        for (at, _) in b.pieces() {
            assert_eq!(b[at].shade(), Color::Dark);
        }
    }

    #[test]
    fn starting_placement_has_twelve_men_per_side() {
        let b = Board::default();
        assert_eq!(b.count(Color::Light), 12);
        assert_eq!(b.count(Color::Dark), 12);
        assert!(b.pieces().all(|(_, p)| p.rank() == Rank::Man));
    }

    #[test]
    fn starting_placement_leaves_the_middle_rows_empty() {
        let b = Board::default();
        assert!(b.pieces().all(|(at, _)| !(3..=4).contains(&at.row)));
    }

    #[test]
    fn starting_placement_puts_each_side_on_its_home_rows() {
        let b = Board::default();
        for (at, p) in b.pieces() {
            assert!(p.color().home_rows().contains(&at.row));
            assert_eq!(at.shade(), Color::Dark);
        }
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().pieces().count(), 0);
    }

    #[proptest]
    fn occupant_returns_piece_on_the_given_square(b: Board, at: Coord) {
        assert_eq!(b.occupant(at), Ok(b[at].occupant()));
    }

    #[proptest]
    fn accessors_fail_if_coordinate_out_of_range(
        mut b: Board,
        #[filter(!Coord::from(#at).is_valid())] at: (i8, i8),
        p: Piece,
    ) {
        let at = Coord::from(at);
        assert_eq!(b.occupant(at), Err(OutOfRangeError(at)));
        assert_eq!(b.square(at).err(), Some(OutOfRangeError(at)));
        assert_eq!(b.adjacent(at).err(), Some(OutOfRangeError(at)));
        assert_eq!(b.place(at, p), Err(OutOfRangeError(at)));
        assert_eq!(b.clear(at), Err(OutOfRangeError(at)));
    }

    #[proptest]
    #[should_panic]
    fn indexing_panics_if_coordinate_out_of_range(b: Board, #[filter(!Coord::from(#at).is_valid())] at: (i8, i8)) {
        let _ = b[Coord::from(at)];
    }

    #[proptest]
    fn place_puts_piece_on_square(mut b: Board, at: Coord, p: Piece) {
        let before = b[at].occupant();
        assert_eq!(b.place(at, p), Ok(before));
        assert_eq!(b.occupant(at), Ok(Some(p)));
    }

    #[test]
    fn place_does_not_check_the_shade_of_the_square() {
        let mut b = Board::empty();
        let at = Coord::new(0, 0);
        assert_eq!(b.place(at, Piece::man(Color::Light)), Ok(None));
        assert_eq!(b[at].shade(), Color::Light);
        assert_eq!(b.render().lines().nth(1), Some("0 L .   .   .   . "));
    }

    #[proptest]
    fn clear_removes_piece_from_square(mut b: Board, at: Coord) {
        let before = b[at].occupant();
        assert_eq!(b.clear(at), Ok(before));
        assert_eq!(b.occupant(at), Ok(None));
    }

    #[proptest]
    fn adjacent_squares_have_the_opposite_shade(b: Board, at: Coord) {
        let adjacent = b.adjacent(at)?;
        assert!((2..=4).contains(&adjacent.len()));
        for sq in adjacent {
            assert_eq!(sq.shade(), !b[at].shade());
        }
    }

    #[test]
    fn corner_squares_have_two_adjacent_squares() {
        let b = Board::default();
        assert_eq!(b.adjacent(Coord::new(0, 0)).map(|a| a.len()), Ok(2));
        assert_eq!(b.adjacent(Coord::new(7, 7)).map(|a| a.len()), Ok(2));
        assert_eq!(b.adjacent(Coord::new(3, 4)).map(|a| a.len()), Ok(4));
    }

    #[proptest]
    fn count_adds_up_to_all_pieces(b: Board) {
        assert_eq!(b.count(Color::Light) + b.count(Color::Dark), b.pieces().count());
    }

    #[test]
    fn renders_starting_placement() {
        let expected = concat!(
            "  0 1 2 3 4 5 6 7\n",
            "0   L   L   L   L \n",
            "1 L   L   L   L   \n",
            "2   L   L   L   L \n",
            "3 .   .   .   .   \n",
            "4   .   .   .   . \n",
            "5 d   d   d   d   \n",
            "6   d   d   d   d \n",
            "7 d   d   d   d   \n",
        );

        assert_eq!(Board::default().render(), expected);
    }

    #[proptest]
    fn rendering_has_a_fixed_width(b: Board) {
        let rendered = b.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().skip(1).all(|l| l.len() == 18));
        assert_eq!(rendered, b.to_string());
    }
}
