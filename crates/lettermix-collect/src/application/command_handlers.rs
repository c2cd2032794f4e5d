//! Command handlers for the collect board.
//!
//! Handlers run the domain method, apply whatever events it produced and
//! return them. A save with nothing left to save returns no events.

use std::sync::Mutex;

use lettermix_core::aggregate::AggregateRoot;
use lettermix_core::clock::Clock;
use lettermix_core::command::Command;
use lettermix_core::error::DomainError;
use lettermix_core::rng::DeterministicRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::aggregates::CollectBoard;
use crate::domain::commands::{
    ChangeAlphabet, ChangeRepeat, RepeatStep, ResetLetters, SaveRandomLetter,
};
use crate::domain::events::CollectEvent;

fn ensure_target(board: &CollectBoard, board_id: Uuid) -> Result<(), DomainError> {
    if board.id == board_id {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "command targets board {board_id} but was sent to board {}",
            board.id
        )))
    }
}

fn commit(board: &mut CollectBoard, command: &dyn Command) -> Vec<CollectEvent> {
    let events = board.commit();
    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        events = events.len(),
        version = board.version(),
        "collect board updated"
    );
    events
}

/// Handles the `SaveRandomLetter` command.
///
/// The `Mutex` is locked only for the synchronous domain call.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board.
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
#[instrument(skip_all, fields(board_id = %command.board_id))]
pub fn handle_save_random_letter(
    command: &SaveRandomLetter,
    board: &mut CollectBoard,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Vec<CollectEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    let saved = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        board.save_random_letter(command.correlation_id, clock, &mut *rng_guard)
    };
    if saved.is_none() {
        info!("every letter is already saved");
    }
    Ok(commit(board, command))
}

/// Handles the `ResetLetters` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board.
#[instrument(skip_all, fields(board_id = %command.board_id))]
pub fn handle_reset_letters(
    command: &ResetLetters,
    board: &mut CollectBoard,
    clock: &dyn Clock,
) -> Result<Vec<CollectEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    board.reset(command.correlation_id, clock);
    Ok(commit(board, command))
}

/// Handles the `ChangeAlphabet` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board
/// or the alphabet repeats a char or contains whitespace.
#[instrument(skip_all, fields(board_id = %command.board_id, alphabet = %command.alphabet))]
pub fn handle_change_alphabet(
    command: &ChangeAlphabet,
    board: &mut CollectBoard,
    clock: &dyn Clock,
) -> Result<Vec<CollectEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    board.change_alphabet(&command.alphabet, command.correlation_id, clock)?;
    Ok(commit(board, command))
}

/// Handles the `ChangeRepeat` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board,
/// or if a step would leave `[MIN_REPEAT, MAX_REPEAT]`.
#[instrument(skip_all, fields(board_id = %command.board_id, step = ?command.step))]
pub fn handle_change_repeat(
    command: &ChangeRepeat,
    board: &mut CollectBoard,
    clock: &dyn Clock,
) -> Result<Vec<CollectEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    match command.step {
        RepeatStep::To(repeat) => board.change_repeat(repeat, command.correlation_id, clock),
        RepeatStep::Increment => board.increment_repeat(command.correlation_id, clock)?,
        RepeatStep::Decrement => board.decrement_repeat(command.correlation_id, clock)?,
    }
    Ok(commit(board, command))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use lettermix_core::aggregate::AggregateRoot;
    use lettermix_core::error::DomainError;
    use lettermix_core::rng::DeterministicRng;
    use uuid::Uuid;

    use crate::application::command_handlers::{
        handle_change_alphabet, handle_change_repeat, handle_reset_letters,
        handle_save_random_letter,
    };
    use crate::domain::aggregates::CollectBoard;
    use crate::domain::commands::{
        ChangeAlphabet, ChangeRepeat, RepeatStep, ResetLetters, SaveRandomLetter,
    };
    use crate::domain::events::CollectEventKind;
    use lettermix_test_support::{FixedClock, MockRng, SequenceRng};

    fn fixed_clock() -> FixedClock {
        FixedClock(1_000.0)
    }

    fn save(board: &mut CollectBoard, rng: &Mutex<dyn DeterministicRng + Send>) -> usize {
        let command = SaveRandomLetter {
            correlation_id: Uuid::new_v4(),
            board_id: board.id,
        };
        handle_save_random_letter(&command, board, &fixed_clock(), rng)
            .unwrap()
            .len()
    }

    #[test]
    fn test_handle_save_random_letter_saves_picked_letter() {
        // Arrange
        let board_id = Uuid::new_v4();
        let mut board = CollectBoard::new(board_id);
        // 0.99 * 9 = 8.91 -> last letter.
        let rng: Mutex<SequenceRng> = Mutex::new(SequenceRng::new(vec![0.99]));
        let rng_ref: &Mutex<dyn DeterministicRng + Send> = &rng;
        let command = SaveRandomLetter {
            correlation_id: Uuid::new_v4(),
            board_id,
        };

        // Act
        let events =
            handle_save_random_letter(&command, &mut board, &fixed_clock(), rng_ref).unwrap();

        // Assert
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            CollectEventKind::LetterSaved(payload) => {
                assert_eq!(payload.letter_id, "letter-8");
                assert_eq!(payload.letter, 'C');
            }
            other => panic!("expected LetterSaved, got {other:?}"),
        }
        assert_eq!(board.saved_count('C'), 1);
        assert_eq!(board.version(), 1);
    }

    #[test]
    fn test_handle_save_random_letter_until_exhausted() {
        // Arrange
        let mut board = CollectBoard::with_settings(Uuid::new_v4(), "AB", 1).unwrap();
        let rng: Mutex<MockRng> = Mutex::new(MockRng);
        let rng_ref: &Mutex<dyn DeterministicRng + Send> = &rng;

        // Act
        let produced: Vec<usize> = (0..3).map(|_| save(&mut board, rng_ref)).collect();

        // Assert
        assert_eq!(produced, [1, 1, 0]);
        assert!(!board.can_save());
        assert_eq!(board.version(), 2);
    }

    #[test]
    fn test_handle_save_random_letter_rejects_other_board() {
        let mut board = CollectBoard::new(Uuid::new_v4());
        let rng: Mutex<MockRng> = Mutex::new(MockRng);
        let rng_ref: &Mutex<dyn DeterministicRng + Send> = &rng;
        let command = SaveRandomLetter {
            correlation_id: Uuid::new_v4(),
            board_id: Uuid::new_v4(),
        };

        let result = handle_save_random_letter(&command, &mut board, &fixed_clock(), rng_ref);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_handle_reset_letters_returns_pool_to_full() {
        // Arrange
        let board_id = Uuid::new_v4();
        let mut board = CollectBoard::new(board_id);
        let rng: Mutex<MockRng> = Mutex::new(MockRng);
        let rng_ref: &Mutex<dyn DeterministicRng + Send> = &rng;
        save(&mut board, rng_ref);
        save(&mut board, rng_ref);

        // Act
        let events = handle_reset_letters(
            &ResetLetters {
                correlation_id: Uuid::new_v4(),
                board_id,
            },
            &mut board,
            &fixed_clock(),
        )
        .unwrap();

        // Assert
        match &events[0].kind {
            CollectEventKind::LettersReset(payload) => {
                assert_eq!(payload.released, ["letter-0", "letter-1"]);
            }
            other => panic!("expected LettersReset, got {other:?}"),
        }
        assert_eq!(board.unsaved().count(), 9);
    }

    #[test]
    fn test_handle_change_alphabet_rejects_whitespace() {
        let board_id = Uuid::new_v4();
        let mut board = CollectBoard::new(board_id);
        let command = ChangeAlphabet {
            correlation_id: Uuid::new_v4(),
            board_id,
            alphabet: "AB C".to_owned(),
        };

        let result = handle_change_alphabet(&command, &mut board, &fixed_clock());

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("whitespace")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(board.version(), 0);
    }

    #[test]
    fn test_handle_change_repeat_decrement_regenerates_pool() {
        let board_id = Uuid::new_v4();
        let mut board = CollectBoard::new(board_id);
        let command = ChangeRepeat {
            correlation_id: Uuid::new_v4(),
            board_id,
            step: RepeatStep::Decrement,
        };

        handle_change_repeat(&command, &mut board, &fixed_clock()).unwrap();

        assert_eq!(board.repeat(), 2);
        assert_eq!(board.letters().len(), 6);
        assert_eq!(board.letters()[2].id, "letter-2");
        assert_eq!(board.letters()[2].letter, 'B');
    }
}
