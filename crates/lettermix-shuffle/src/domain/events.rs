//! Domain events for the shuffle board.

use lettermix_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type for `LettersShuffled`.
pub const LETTERS_SHUFFLED_EVENT_TYPE: &str = "shuffle.letters_shuffled";
/// Event type for `LettersOrdered`.
pub const LETTERS_ORDERED_EVENT_TYPE: &str = "shuffle.letters_ordered";
/// Event type for `AlphabetChanged`.
pub const ALPHABET_CHANGED_EVENT_TYPE: &str = "shuffle.alphabet_changed";
/// Event type for `RepeatChanged`.
pub const REPEAT_CHANGED_EVENT_TYPE: &str = "shuffle.repeat_changed";

/// Emitted when the row is shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LettersShuffled {
    /// The board identifier.
    pub board_id: Uuid,
    /// Letter ids in their new left-to-right order.
    pub order: Vec<String>,
}

/// Emitted when the row is put back in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LettersOrdered {
    /// The board identifier.
    pub board_id: Uuid,
    /// Letter ids in their new left-to-right order.
    pub order: Vec<String>,
}

/// Emitted when the alphabet is replaced; the row is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetChanged {
    /// The board identifier.
    pub board_id: Uuid,
    /// The new alphabet, one letter per char.
    pub alphabet: String,
}

/// Emitted when the repeat count changes; the row is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatChanged {
    /// The board identifier.
    pub board_id: Uuid,
    /// The new (already clamped) repeat count.
    pub repeat: usize,
}

/// Event payload variants for the shuffle board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleEventKind {
    /// The row has been shuffled.
    LettersShuffled(LettersShuffled),
    /// The row has been restored to generation order.
    LettersOrdered(LettersOrdered),
    /// The alphabet has been replaced.
    AlphabetChanged(AlphabetChanged),
    /// The repeat count has changed.
    RepeatChanged(RepeatChanged),
}

/// Domain event envelope for the shuffle board.
#[derive(Debug, Clone)]
pub struct ShuffleEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: ShuffleEventKind,
}

impl ShuffleEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LettersShuffled(_) => LETTERS_SHUFFLED_EVENT_TYPE,
            Self::LettersOrdered(_) => LETTERS_ORDERED_EVENT_TYPE,
            Self::AlphabetChanged(_) => ALPHABET_CHANGED_EVENT_TYPE,
            Self::RepeatChanged(_) => REPEAT_CHANGED_EVENT_TYPE,
        }
    }
}

impl DomainEvent for ShuffleEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("ShuffleEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
