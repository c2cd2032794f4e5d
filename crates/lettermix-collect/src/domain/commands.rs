//! Commands for the collect board.

use lettermix_core::command::Command;
use uuid::Uuid;

/// Command to save one random unsaved letter.
#[derive(Debug, Clone)]
pub struct SaveRandomLetter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
}

impl Command for SaveRandomLetter {
    fn command_type(&self) -> &'static str {
        "collect.save_random_letter"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to empty every tally.
#[derive(Debug, Clone)]
pub struct ResetLetters {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The board identifier.
    pub board_id: Uuid,
}

impl Command for ResetLetters {
    fn command_type(&self) -> &'static str {
        "collect.reset_letters"
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
    /// The alphabet as typed; must not repeat a char or contain whitespace.
    pub alphabet: String,
}

impl Command for ChangeAlphabet {
    fn command_type(&self) -> &'static str {
        "collect.change_alphabet"
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
        "collect.change_repeat"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
