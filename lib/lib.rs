/// Draughts domain types.
pub mod draughts;
/// Move validation and execution.
pub mod rules;
