//! Aggregate root for the collect board.

use std::collections::HashSet;

use lettermix_core::aggregate::AggregateRoot;
use lettermix_core::clock::Clock;
use lettermix_core::error::DomainError;
use lettermix_core::event::EventMetadata;
use lettermix_core::rng::DeterministicRng;
use lettermix_core::settings::{
    DEFAULT_ALPHABET, DEFAULT_REPEAT, MAX_REPEAT, MIN_REPEAT, can_decrement, can_increment,
    clamp_repeat,
};
use serde::Serialize;
use uuid::Uuid;

use super::events::{
    AlphabetChanged, CarriedTally, CollectEvent, CollectEventKind, LetterSaved, LettersReset,
    RepeatChanged,
};

/// One letter in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectLetter {
    /// Stable id, `"letter-{alphabet_index * repeat + n}"` with `n` from 0.
    pub id: String,
    /// The displayed character.
    pub letter: char,
    /// Whether the letter sits in its tally rather than the pool.
    pub is_saved: bool,
}

/// Builds the pool for an alphabet, every letter unsaved.
#[must_use]
pub fn generate_letters(repeat: usize, alphabet: &[char]) -> Vec<CollectLetter> {
    alphabet
        .iter()
        .enumerate()
        .flat_map(|(char_index, &letter)| {
            (0..repeat).map(move |n| CollectLetter {
                id: format!("letter-{}", char_index * repeat + n),
                letter,
                is_saved: false,
            })
        })
        .collect()
}

/// Checks an alphabet typed into the collect board.
///
/// # Errors
///
/// Returns `DomainError::Validation` on whitespace or a repeated char.
pub fn validate_alphabet(alphabet: &str) -> Result<Vec<char>, DomainError> {
    let mut seen = HashSet::new();
    let mut chars = Vec::new();
    for ch in alphabet.chars() {
        if ch.is_whitespace() {
            return Err(DomainError::Validation(
                "alphabet must not contain whitespace".to_owned(),
            ));
        }
        if !seen.insert(ch) {
            return Err(DomainError::Validation(format!(
                "alphabet already contains '{ch}'"
            )));
        }
        chars.push(ch);
    }
    Ok(chars)
}

/// The aggregate root for a collect board.
#[derive(Debug)]
pub struct CollectBoard {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    alphabet: Vec<char>,
    repeat: usize,
    letters: Vec<CollectLetter>,
    /// Uncommitted events pending application.
    uncommitted_events: Vec<CollectEvent>,
}

impl CollectBoard {
    /// Creates a board with the default alphabet and repeat count.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        Self {
            id,
            version: 0,
            letters: generate_letters(DEFAULT_REPEAT, &alphabet),
            alphabet,
            repeat: DEFAULT_REPEAT,
            uncommitted_events: Vec::new(),
        }
    }

    /// Creates a board with the given alphabet; `repeat` is clamped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the alphabet is rejected by
    /// [`validate_alphabet`].
    pub fn with_settings(id: Uuid, alphabet: &str, repeat: usize) -> Result<Self, DomainError> {
        let alphabet = validate_alphabet(alphabet)?;
        let repeat = clamp_repeat(repeat);
        Ok(Self {
            id,
            version: 0,
            letters: generate_letters(repeat, &alphabet),
            alphabet,
            repeat,
            uncommitted_events: Vec::new(),
        })
    }

    /// Returns the alphabet as a string.
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }

    /// Returns the alphabet letters in order.
    #[must_use]
    pub fn alphabet_letters(&self) -> &[char] {
        &self.alphabet
    }

    /// Returns the repeat count.
    #[must_use]
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Returns every letter, saved or not, in board order.
    #[must_use]
    pub fn letters(&self) -> &[CollectLetter] {
        &self.letters
    }

    /// Returns the letters still in the pool, in board order.
    pub fn unsaved(&self) -> impl Iterator<Item = &CollectLetter> {
        self.letters.iter().filter(|l| !l.is_saved)
    }

    /// Returns how many copies of `letter` are saved.
    #[must_use]
    pub fn saved_count(&self, letter: char) -> usize {
        self.letters
            .iter()
            .filter(|l| l.letter == letter && l.is_saved)
            .count()
    }

    /// Whether any letter is left to save.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.letters.iter().any(|l| !l.is_saved)
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: CollectEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = CollectEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                occurred_at_ms: clock.now_millis(),
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }

    /// Picks one unsaved letter at `floor(next_f64() * unsaved)` and produces
    /// a `LetterSaved` event. Returns the picked id.
    ///
    /// With nothing left to save, returns `None` without drawing or
    /// recording anything.
    pub fn save_random_letter(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Option<String> {
        let unsaved: Vec<&CollectLetter> = self.unsaved().collect();
        let picked = unsaved[rng.next_index(unsaved.len())?];
        let payload = LetterSaved {
            board_id: self.id,
            letter_id: picked.id.clone(),
            letter: picked.letter,
        };
        let letter_id = payload.letter_id.clone();

        self.record(CollectEventKind::LetterSaved(payload), correlation_id, clock);
        Some(letter_id)
    }

    /// Empties every tally, producing a `LettersReset` event.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let released = self
            .letters
            .iter()
            .filter(|l| l.is_saved)
            .map(|l| l.id.clone())
            .collect();
        self.record(
            CollectEventKind::LettersReset(LettersReset {
                board_id: self.id,
                released,
            }),
            correlation_id,
            clock,
        );
    }

    /// Replaces the alphabet, producing an `AlphabetChanged` event that
    /// carries the tallies of letters kept in the new alphabet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the alphabet is rejected by
    /// [`validate_alphabet`].
    pub fn change_alphabet(
        &mut self,
        alphabet: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let chars = validate_alphabet(alphabet)?;
        let carried = chars
            .iter()
            .map(|&letter| CarriedTally {
                letter,
                saved: self.saved_count(letter),
            })
            .filter(|tally| tally.saved > 0)
            .collect();

        self.record(
            CollectEventKind::AlphabetChanged(AlphabetChanged {
                board_id: self.id,
                alphabet: alphabet.to_owned(),
                carried,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Sets the repeat count, clamped into range, producing a
    /// `RepeatChanged` event. Every tally is dropped.
    pub fn change_repeat(&mut self, requested: usize, correlation_id: Uuid, clock: &dyn Clock) {
        self.record(
            CollectEventKind::RepeatChanged(RepeatChanged {
                board_id: self.id,
                repeat: clamp_repeat(requested),
            }),
            correlation_id,
            clock,
        );
    }

    /// Raises the repeat count by one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the count is already at its maximum.
    pub fn increment_repeat(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if !can_increment(self.repeat) {
            return Err(DomainError::Validation(format!(
                "repeat is already at its maximum of {MAX_REPEAT}"
            )));
        }
        self.change_repeat(self.repeat + 1, correlation_id, clock);
        Ok(())
    }

    /// Lowers the repeat count by one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the count is already at its minimum.
    pub fn decrement_repeat(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if !can_decrement(self.repeat) {
            return Err(DomainError::Validation(format!(
                "repeat is already at its minimum of {MIN_REPEAT}"
            )));
        }
        self.change_repeat(self.repeat - 1, correlation_id, clock);
        Ok(())
    }
}

impl AggregateRoot for CollectBoard {
    type Event = CollectEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            CollectEventKind::LetterSaved(payload) => {
                if let Some(letter) = self.letters.iter_mut().find(|l| l.id == payload.letter_id) {
                    letter.is_saved = true;
                }
            }
            CollectEventKind::LettersReset(_) => {
                for letter in &mut self.letters {
                    letter.is_saved = false;
                }
            }
            CollectEventKind::AlphabetChanged(payload) => {
                self.alphabet = payload.alphabet.chars().collect();
                self.letters = generate_letters(self.repeat, &self.alphabet);
                for tally in &payload.carried {
                    self.letters
                        .iter_mut()
                        .filter(|l| l.letter == tally.letter)
                        .take(tally.saved)
                        .for_each(|l| l.is_saved = true);
                }
            }
            CollectEventKind::RepeatChanged(payload) => {
                self.repeat = payload.repeat;
                self.letters = generate_letters(self.repeat, &self.alphabet);
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
