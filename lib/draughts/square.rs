use crate::draughts::{Color, Piece};

/// A square on the draughts board.
///
/// The shade is fixed when the [`Board`][`crate::draughts::Board`] is constructed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Square {
    shade: Color,
    occupant: Option<Piece>,
}

impl Square {
    /// An empty square of the given shade.
    #[inline(always)]
    pub(crate) const fn new(shade: Color) -> Self {
        Square {
            shade,
            occupant: None,
        }
    }

    /// This square's shade.
    #[inline(always)]
    pub fn shade(&self) -> Color {
        self.shade
    }

    /// The [`Piece`] on this square, if any.
    #[inline(always)]
    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    /// Whether no piece stands on this square.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Replaces the occupant, returning the previous one.
    #[inline(always)]
    pub(crate) fn replace(&mut self, occupant: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.occupant, occupant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_square_is_empty(c: Color) {
        let sq = Square::new(c);
        assert!(sq.is_empty());
        assert_eq!(sq.shade(), c);
    }

    #[proptest]
    fn replace_returns_previous_occupant(c: Color, a: Piece, b: Option<Piece>) {
        let mut sq = Square::new(c);
        assert_eq!(sq.replace(Some(a)), None);
        assert_eq!(sq.replace(b), Some(a));
        assert_eq!(sq.occupant(), b);
        assert_eq!(sq.shade(), c);
    }
}
