use derive_more::Display;

/// The promotion state of a [`Piece`][`crate::draughts::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "man")]
    Man,
    #[display(fmt = "king")]
    King,
}
