//! Command handlers for the shuffle board.
//!
//! Each handler checks the command targets the given board, runs the domain
//! method, applies the resulting events and returns them so a renderer can
//! animate the transition.

use std::sync::Mutex;

use lettermix_core::aggregate::AggregateRoot;
use lettermix_core::clock::Clock;
use lettermix_core::command::Command;
use lettermix_core::error::DomainError;
use lettermix_core::rng::DeterministicRng;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::aggregates::ShuffleBoard;
use crate::domain::commands::{
    ChangeAlphabet, ChangeRepeat, OrderLetters, RepeatStep, ShuffleLetters,
};
use crate::domain::events::ShuffleEvent;

fn ensure_target(board: &ShuffleBoard, board_id: Uuid) -> Result<(), DomainError> {
    if board.id == board_id {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "command targets board {board_id} but was sent to board {}",
            board.id
        )))
    }
}

fn commit(board: &mut ShuffleBoard, command: &dyn Command) -> Vec<ShuffleEvent> {
    let events = board.commit();
    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        events = events.len(),
        version = board.version(),
        "shuffle board updated"
    );
    events
}

/// Handles the `ShuffleLetters` command.
///
/// The `Mutex` is locked only for the synchronous domain call.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board.
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
#[instrument(skip_all, fields(board_id = %command.board_id))]
pub fn handle_shuffle_letters(
    command: &ShuffleLetters,
    board: &mut ShuffleBoard,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Vec<ShuffleEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        board.shuffle(command.correlation_id, clock, &mut *rng_guard);
    }
    Ok(commit(board, command))
}

/// Handles the `OrderLetters` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board.
#[instrument(skip_all, fields(board_id = %command.board_id))]
pub fn handle_order_letters(
    command: &OrderLetters,
    board: &mut ShuffleBoard,
    clock: &dyn Clock,
) -> Result<Vec<ShuffleEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    board.order(command.correlation_id, clock);
    Ok(commit(board, command))
}

/// Handles the `ChangeAlphabet` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command targets another board.
#[instrument(skip_all, fields(board_id = %command.board_id, alphabet = %command.alphabet))]
pub fn handle_change_alphabet(
    command: &ChangeAlphabet,
    board: &mut ShuffleBoard,
    clock: &dyn Clock,
) -> Result<Vec<ShuffleEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    board.change_alphabet(&command.alphabet, command.correlation_id, clock);
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
    board: &mut ShuffleBoard,
    clock: &dyn Clock,
) -> Result<Vec<ShuffleEvent>, DomainError> {
    ensure_target(board, command.board_id)?;
    match command.step {
        RepeatStep::To(repeat) => board.change_repeat(repeat, command.correlation_id, clock),
        RepeatStep::Increment => board.increment_repeat(command.correlation_id, clock)?,
        RepeatStep::Decrement => board.decrement_repeat(command.correlation_id, clock)?,
    }
    Ok(commit(board, command))
}
