use crate::draughts::{Board, Coord};
use tracing::debug;

/// Promotes the man at the given [`Coord`] if it stands on its promotion row.
///
/// Returns whether a promotion took place, kings and empty squares are left alone.
pub fn promote(board: &mut Board, at: Coord) -> bool {
    match board.occupant(at) {
        Ok(Some(p)) if !p.is_king() && at.row == p.color().promotion_row() => {
            board.set(at, Some(p.promote()));
            debug!(%at, color = %p.color(), "promoted to king");
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draughts::{Color, Piece};
    use test_strategy::proptest;

    #[proptest]
    fn men_on_their_promotion_row_become_kings(
        mut b: Board,
        c: Color,
        #[strategy(0..Board::SIZE)] col: i8,
    ) {
        let at = Coord::new(c.promotion_row(), col);
        b.set(at, Some(Piece::man(c)));
        assert!(promote(&mut b, at));
        assert_eq!(b[at].occupant(), Some(Piece::king(c)));
    }

    #[proptest]
    fn men_elsewhere_are_not_promoted(
        mut b: Board,
        c: Color,
        #[filter(#at.row != #c.promotion_row())] at: Coord,
    ) {
        b.set(at, Some(Piece::man(c)));
        assert!(!promote(&mut b, at));
        assert_eq!(b[at].occupant(), Some(Piece::man(c)));
    }

    #[proptest]
    fn promoting_a_king_is_a_no_op(mut b: Board, c: Color, at: Coord) {
        b.set(at, Some(Piece::king(c)));
        let before = b.clone();
        assert!(!promote(&mut b, at));
        assert_eq!(b, before);
    }

    #[proptest]
    fn promoting_an_empty_square_is_a_no_op(mut b: Board, at: Coord) {
        b.set(at, None);
        let before = b.clone();
        assert!(!promote(&mut b, at));
        assert_eq!(b, before);
    }

    #[test]
    fn men_are_not_promoted_on_their_own_back_rank() {
        let mut b = Board::empty();
        let at = Coord::new(0, 1);
        b.set(at, Some(Piece::man(Color::Light)));
        assert!(!promote(&mut b, at));
    }
}
