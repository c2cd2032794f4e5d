//! Query handlers for the shuffle board.

use lettermix_core::aggregate::AggregateRoot;
use lettermix_core::settings::{can_decrement, can_increment};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{Letter, ShuffleBoard};

/// Read-only view of a shuffle board.
#[derive(Debug, Serialize)]
pub struct ShuffleBoardView {
    /// The board identifier.
    pub board_id: Uuid,
    /// The alphabet as typed.
    pub alphabet: String,
    /// Copies of each letter.
    pub repeat: usize,
    /// Tiles in row order.
    pub letters: Vec<Letter>,
    /// Whether the "+" control is enabled.
    pub can_increment: bool,
    /// Whether the "-" control is enabled.
    pub can_decrement: bool,
    /// Current version (event count).
    pub version: i64,
}

/// Returns a serializable snapshot of the board.
#[must_use]
pub fn board_view(board: &ShuffleBoard) -> ShuffleBoardView {
    ShuffleBoardView {
        board_id: board.id,
        alphabet: board.alphabet(),
        repeat: board.repeat(),
        letters: board.letters().to_vec(),
        can_increment: can_increment(board.repeat()),
        can_decrement: can_decrement(board.repeat()),
        version: board.version(),
    }
}
