//! Query handlers for the collect board.

use lettermix_core::aggregate::AggregateRoot;
use lettermix_core::settings::{can_decrement, can_increment};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{CollectBoard, CollectLetter};

/// Saved count for one alphabet letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyView {
    /// The alphabet letter.
    pub letter: char,
    /// How many of its copies are saved.
    pub saved: usize,
}

/// Read-only view of a collect board.
#[derive(Debug, Serialize)]
pub struct CollectBoardView {
    /// The board identifier.
    pub board_id: Uuid,
    /// The alphabet as typed.
    pub alphabet: String,
    /// Copies of each letter.
    pub repeat: usize,
    /// Letters still in the pool, in board order.
    pub unsaved: Vec<CollectLetter>,
    /// One tally per alphabet letter, in alphabet order.
    pub tallies: Vec<TallyView>,
    /// Whether the save control is enabled.
    pub can_save: bool,
    /// Whether the "+" control is enabled.
    pub can_increment: bool,
    /// Whether the "-" control is enabled.
    pub can_decrement: bool,
    /// Current version (event count).
    pub version: i64,
}

/// Returns a serializable snapshot of the board.
#[must_use]
pub fn board_view(board: &CollectBoard) -> CollectBoardView {
    CollectBoardView {
        board_id: board.id,
        alphabet: board.alphabet(),
        repeat: board.repeat(),
        unsaved: board.unsaved().cloned().collect(),
        tallies: board
            .alphabet_letters()
            .iter()
            .map(|&letter| TallyView {
                letter,
                saved: board.saved_count(letter),
            })
            .collect(),
        can_save: board.can_save(),
        can_increment: can_increment(board.repeat()),
        can_decrement: can_decrement(board.repeat()),
        version: board.version(),
    }
}
