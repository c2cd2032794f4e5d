//! Commands for the shuffle board.

use lettermix_core::command::Command;
use uuid::Uuid;

/// Command to shuffle the row.
#[derive(Debug, Clone)]
pub struct ShuffleLetters {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
}

impl Command for ShuffleLetters {
    fn command_type(&self) -> &'static str {
        "shuffle.shuffle_letters"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to restore generation order.
#[derive(Debug, Clone)]
pub struct OrderLetters {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
}

impl Command for OrderLetters {
    fn command_type(&self) -> &'static str {
        "shuffle.order_letters"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the alphabet.
#[derive(Debug, Clone)]
pub struct ChangeAlphabet {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
    /// The alphabet as typed, one letter per char.
    pub alphabet: String,
}

impl Command for ChangeAlphabet {
    fn command_type(&self) -> &'static str {
        "shuffle.change_alphabet"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// How a repeat change was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatStep {
    /// Set an explicit count; out-of-range values are clamped.
    To(usize),
    /// The "+" control.
    Increment,
    /// The "-" control.
    Decrement,
}

/// Command to change the repeat count.
#[derive(Debug, Clone)]
pub struct ChangeRepeat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
    /// The requested change.
    pub step: RepeatStep,
}

impl Command for ChangeRepeat {
    fn command_type(&self) -> &'static str {
        "shuffle.change_repeat"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
