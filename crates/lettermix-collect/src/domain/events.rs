//! Domain events for the collect board.

use lettermix_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type for `LetterSaved`.
pub const LETTER_SAVED_EVENT_TYPE: &str = "collect.letter_saved";
/// Event type for `LettersReset`.
pub const LETTERS_RESET_EVENT_TYPE: &str = "collect.letters_reset";
/// Event type for `AlphabetChanged`.
pub const ALPHABET_CHANGED_EVENT_TYPE: &str = "collect.alphabet_changed";
/// Event type for `RepeatChanged`.
pub const REPEAT_CHANGED_EVENT_TYPE: &str = "collect.repeat_changed";

/// Emitted when a letter moves from the pool into its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSaved {
    /// The board identifier.
    pub board_id: Uuid,
    /// Id of the saved letter.
    pub letter_id: String,
    /// The saved character, naming the tally it joins.
    pub letter: char,
}

/// Emitted when every tally is emptied back into the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LettersReset {
    /// The board identifier.
    pub board_id: Uuid,
    /// Ids of the letters that were saved, in board order.
    pub released: Vec<String>,
}

/// Saved count carried across an alphabet change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarriedTally {
    /// The letter kept in the new alphabet.
    pub letter: char,
    /// How many of its copies stay saved.
    pub saved: usize,
}

/// Emitted when the alphabet is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetChanged {
    /// The board identifier.
    pub board_id: Uuid,
    /// The new alphabet.
    pub alphabet: String,
    /// Non-empty tallies of letters present in both alphabets.
    pub carried: Vec<CarriedTally>,
}

/// Emitted when the repeat count changes; all tallies are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatChanged {
    /// The board identifier.
    pub board_id: Uuid,
    /// The new (already clamped) repeat count.
    pub repeat: usize,
}

/// Event payload variants for the collect board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectEventKind {
    /// A letter has been saved.
    LetterSaved(LetterSaved),
    /// All tallies have been emptied.
    LettersReset(LettersReset),
    /// The alphabet has been replaced.
    AlphabetChanged(AlphabetChanged),
    /// The repeat count has changed.
    RepeatChanged(RepeatChanged),
}

impl CollectEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LetterSaved(_) => LETTER_SAVED_EVENT_TYPE,
            Self::LettersReset(_) => LETTERS_RESET_EVENT_TYPE,
            Self::AlphabetChanged(_) => ALPHABET_CHANGED_EVENT_TYPE,
            Self::RepeatChanged(_) => REPEAT_CHANGED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the collect board.
#[derive(Debug, Clone)]
pub struct CollectEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CollectEventKind,
}

impl DomainEvent for CollectEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("CollectEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
