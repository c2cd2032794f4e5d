//! Scripted walkthrough of both boards.
//!
//! Drives each board through its controls the way a user would, printing
//! the panel after every step. Both boards draw from one shared generator,
//! so a fixed seed reproduces the whole run.

use std::io::Write;
use std::sync::Mutex;

use lettermix_collect::application::command_handlers as collect_handlers;
use lettermix_collect::application::query_handlers as collect_queries;
use lettermix_collect::domain::aggregates::CollectBoard;
use lettermix_collect::domain::commands::{ResetLetters, SaveRandomLetter};
use lettermix_collect::domain::events::CollectEventKind;
use lettermix_core::clock::Clock;
use lettermix_core::error::DomainError;
use lettermix_core::rng::DeterministicRng;
use lettermix_shuffle::application::command_handlers as shuffle_handlers;
use lettermix_shuffle::application::query_handlers as shuffle_queries;
use lettermix_shuffle::domain::aggregates::ShuffleBoard;
use lettermix_shuffle::domain::commands::{OrderLetters, ShuffleLetters};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::{ConfigError, DemoConfig};
use crate::controls::Button;
use crate::render;

/// Errors that end a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A board rejected a command.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// What a walkthrough did, for callers that want more than the printout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Row order after the shuffle step.
    pub shuffled: Vec<String>,
    /// Letter ids in the order they were saved.
    pub saved: Vec<String>,
    /// Events produced across both boards.
    pub events: usize,
}

fn print_panel(out: &mut dyn Write, lines: &[String]) -> Result<(), DemoError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs the walkthrough, writing panels to `out`.
///
/// # Errors
///
/// Returns `DemoError::Domain` if the configured alphabet is not valid for
/// the collect board, or `DemoError::Io` if writing fails.
pub fn run(
    config: &DemoConfig,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    out: &mut dyn Write,
) -> Result<Summary, DemoError> {
    let mut events = 0;

    // Algorithm A
    let shuffle_id = Uuid::new_v4();
    let mut shuffle_board = ShuffleBoard::with_settings(shuffle_id, &config.alphabet, config.repeat);
    info!(board_id = %shuffle_id, alphabet = %shuffle_board.alphabet(), "shuffle board ready");
    print_panel(out, &render::shuffle_panel(&shuffle_queries::board_view(&shuffle_board)))?;

    events += shuffle_handlers::handle_shuffle_letters(
        &ShuffleLetters {
            correlation_id: Uuid::new_v4(),
            board_id: shuffle_id,
        },
        &mut shuffle_board,
        clock,
        rng,
    )?
    .len();
    let shuffled = shuffle_board
        .letters()
        .iter()
        .map(|letter| letter.id.clone())
        .collect();
    print_panel(out, &render::shuffle_panel(&shuffle_queries::board_view(&shuffle_board)))?;

    events += shuffle_handlers::handle_order_letters(
        &OrderLetters {
            correlation_id: Uuid::new_v4(),
            board_id: shuffle_id,
        },
        &mut shuffle_board,
        clock,
    )?
    .len();
    print_panel(out, &render::shuffle_panel(&shuffle_queries::board_view(&shuffle_board)))?;

    // Algorithm B
    let collect_id = Uuid::new_v4();
    let mut collect_board = CollectBoard::with_settings(collect_id, &config.alphabet, config.repeat)?;
    info!(board_id = %collect_id, alphabet = %collect_board.alphabet(), "collect board ready");
    print_panel(out, &render::collect_panel(&collect_queries::board_view(&collect_board)))?;

    let mut saved = Vec::new();
    loop {
        let save_button = Button::new("Save random letter").disabled(!collect_board.can_save());
        let mut outcome = None;
        let command = SaveRandomLetter {
            correlation_id: Uuid::new_v4(),
            board_id: collect_id,
        };
        save_button.press(|| {
            outcome = Some(collect_handlers::handle_save_random_letter(
                &command,
                &mut collect_board,
                clock,
                rng,
            ));
        });
        let Some(result) = outcome else {
            break;
        };
        for event in result? {
            events += 1;
            if let CollectEventKind::LetterSaved(payload) = event.kind {
                writeln!(out, "saved {} ({})", payload.letter, payload.letter_id)?;
                saved.push(payload.letter_id);
            }
        }
    }
    writeln!(out)?;
    print_panel(out, &render::collect_panel(&collect_queries::board_view(&collect_board)))?;

    events += collect_handlers::handle_reset_letters(
        &ResetLetters {
            correlation_id: Uuid::new_v4(),
            board_id: collect_id,
        },
        &mut collect_board,
        clock,
    )?
    .len();
    print_panel(out, &render::collect_panel(&collect_queries::board_view(&collect_board)))?;

    info!(events, saved = saved.len(), "walkthrough finished");
    Ok(Summary {
        shuffled,
        saved,
        events,
    })
}
