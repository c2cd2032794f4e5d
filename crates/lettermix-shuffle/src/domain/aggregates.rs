//! Aggregate root for the shuffle board.

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
    AlphabetChanged, LettersOrdered, LettersShuffled, RepeatChanged, ShuffleEvent,
    ShuffleEventKind,
};

/// One tile in the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    /// Stable id, `"{char}{alphabet_index}-{n}"` with `n` starting at 1.
    pub id: String,
    /// Current slot in the row.
    pub position: usize,
    /// Slot the tile was generated into.
    pub initial_position: usize,
    /// The displayed character.
    pub letter: char,
}

/// Builds the row for an alphabet: each char repeated `repeat` times, in
/// alphabet order.
#[must_use]
pub fn generate_letters(repeat: usize, alphabet: &[char]) -> Vec<Letter> {
    let mut letters = Vec::with_capacity(repeat * alphabet.len());
    for (char_index, &letter) in alphabet.iter().enumerate() {
        for n in 1..=repeat {
            let position = letters.len();
            letters.push(Letter {
                id: format!("{letter}{char_index}-{n}"),
                position,
                initial_position: position,
                letter,
            });
        }
    }
    letters
}

/// The aggregate root for a shuffle board.
#[derive(Debug)]
pub struct ShuffleBoard {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    alphabet: Vec<char>,
    repeat: usize,
    /// Tiles, always sorted by `position`.
    letters: Vec<Letter>,
    /// Uncommitted events pending application.
    uncommitted_events: Vec<ShuffleEvent>,
}

impl ShuffleBoard {
    /// Creates a board with the default alphabet and repeat count.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self::with_settings(id, DEFAULT_ALPHABET, DEFAULT_REPEAT)
    }

    /// Creates a board with the given alphabet; `repeat` is clamped.
    #[must_use]
    pub fn with_settings(id: Uuid, alphabet: &str, repeat: usize) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        let repeat = clamp_repeat(repeat);
        Self {
            id,
            version: 0,
            letters: generate_letters(repeat, &alphabet),
            alphabet,
            repeat,
            uncommitted_events: Vec::new(),
        }
    }

    /// Returns the alphabet as a string.
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }

    /// Returns the repeat count.
    #[must_use]
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Returns the tiles in row order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: ShuffleEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = ShuffleEvent {
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

    /// Shuffles the row, producing a `LettersShuffled` event.
    ///
    /// Draws one value per tile, in current row order, and sorts the tiles
    /// by their draw. Ties keep their current relative order.
    pub fn shuffle(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) {
        let mut keyed: Vec<(f64, &str)> = self
            .letters
            .iter()
            .map(|letter| (rng.next_f64(), letter.id.as_str()))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        let order = keyed.into_iter().map(|(_, id)| id.to_owned()).collect();

        self.record(
            ShuffleEventKind::LettersShuffled(LettersShuffled {
                board_id: self.id,
                order,
            }),
            correlation_id,
            clock,
        );
    }

    /// Restores generation order, producing a `LettersOrdered` event.
    pub fn order(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let mut by_origin: Vec<&Letter> = self.letters.iter().collect();
        by_origin.sort_by_key(|letter| letter.initial_position);
        let order = by_origin.into_iter().map(|l| l.id.clone()).collect();

        self.record(
            ShuffleEventKind::LettersOrdered(LettersOrdered {
                board_id: self.id,
                order,
            }),
            correlation_id,
            clock,
        );
    }

    /// Replaces the alphabet, producing an `AlphabetChanged` event.
    ///
    /// Any text is accepted, including an empty string or repeated chars.
    pub fn change_alphabet(&mut self, alphabet: &str, correlation_id: Uuid, clock: &dyn Clock) {
        self.record(
            ShuffleEventKind::AlphabetChanged(AlphabetChanged {
                board_id: self.id,
                alphabet: alphabet.to_owned(),
            }),
            correlation_id,
            clock,
        );
    }

    /// Sets the repeat count, clamped into range, producing a
    /// `RepeatChanged` event.
    pub fn change_repeat(&mut self, requested: usize, correlation_id: Uuid, clock: &dyn Clock) {
        self.record(
            ShuffleEventKind::RepeatChanged(RepeatChanged {
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

    fn reposition(&mut self, order: &[String]) {
        for (position, id) in order.iter().enumerate() {
            if let Some(letter) = self.letters.iter_mut().find(|l| &l.id == id) {
                letter.position = position;
            }
        }
        self.letters.sort_by_key(|letter| letter.position);
    }
}

impl AggregateRoot for ShuffleBoard {
    type Event = ShuffleEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            ShuffleEventKind::LettersShuffled(payload) => self.reposition(&payload.order),
            ShuffleEventKind::LettersOrdered(payload) => self.reposition(&payload.order),
            ShuffleEventKind::AlphabetChanged(payload) => {
                self.alphabet = payload.alphabet.chars().collect();
                self.letters = generate_letters(self.repeat, &self.alphabet);
            }
            ShuffleEventKind::RepeatChanged(payload) => {
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

#[cfg(test)]
mod tests {
    use super::*;
    use lettermix_core::event::DomainEvent;
    use lettermix_core::rng::Lcg;

    use crate::domain::events::{
        ALPHABET_CHANGED_EVENT_TYPE, LETTERS_SHUFFLED_EVENT_TYPE, REPEAT_CHANGED_EVENT_TYPE,
    };

    #[derive(Debug)]
    struct FixedClock(f64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> f64 {
            self.0
        }
    }

    fn ids(board: &ShuffleBoard) -> Vec<&str> {
        board.letters().iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_generate_letters_repeats_each_char_in_order() {
        // Act
        let letters = generate_letters(2, &['A', 'B']);

        // Assert
        let ids: Vec<&str> = letters.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["A0-1", "A0-2", "B1-1", "B1-2"]);
        for (index, letter) in letters.iter().enumerate() {
            assert_eq!(letter.position, index);
            assert_eq!(letter.initial_position, index);
        }
        assert_eq!(letters[2].letter, 'B');
    }

    #[test]
    fn test_generate_letters_with_duplicate_chars_keeps_ids_unique() {
        let letters = generate_letters(1, &['A', 'A']);

        assert_eq!(letters[0].id, "A0-1");
        assert_eq!(letters[1].id, "A1-1");
    }

    #[test]
    fn test_new_board_uses_defaults() {
        let board = ShuffleBoard::new(Uuid::new_v4());

        assert_eq!(board.alphabet(), "ABC");
        assert_eq!(board.repeat(), 3);
        assert_eq!(board.letters().len(), 9);
        assert_eq!(board.version(), 0);
    }

    #[test]
    fn test_with_settings_clamps_repeat() {
        let board = ShuffleBoard::with_settings(Uuid::new_v4(), "XY", 40);

        assert_eq!(board.repeat(), 10);
        assert_eq!(board.letters().len(), 20);
    }

    #[test]
    fn test_shuffle_produces_letters_shuffled_event() {
        // Arrange
        let board_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let clock = FixedClock(250.5);
        let mut board = ShuffleBoard::with_settings(board_id, "AB", 1);
        let mut rng = Lcg::with_seed(0);

        // Act
        board.shuffle(correlation_id, &clock, &mut rng);

        // Assert
        let events = board.uncommitted_events();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.event_type(), LETTERS_SHUFFLED_EVENT_TYPE);

        let meta = event.metadata();
        assert_eq!(meta.aggregate_id, board_id);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, correlation_id);
        assert!((meta.occurred_at_ms - 250.5).abs() < f64::EPSILON);

        // Seed 0 draws 0.236... for A then 0.278... for B: order is unchanged.
        match &event.kind {
            ShuffleEventKind::LettersShuffled(payload) => {
                assert_eq!(payload.board_id, board_id);
                assert_eq!(payload.order, ["A0-1", "B1-1"]);
            }
            other => panic!("expected LettersShuffled, got {other:?}"),
        }
    }

    #[test]
    fn test_shuffle_does_not_move_tiles_until_applied() {
        let mut board = ShuffleBoard::new(Uuid::new_v4());
        let before: Vec<String> = board.letters().iter().map(|l| l.id.clone()).collect();

        board.shuffle(Uuid::new_v4(), &FixedClock(0.0), &mut Lcg::with_seed(9));

        assert_eq!(ids(&board), before);
    }

    #[test]
    fn test_apply_shuffle_then_order_restores_generation_order() {
        // Arrange
        let clock = FixedClock(0.0);
        let mut board = ShuffleBoard::new(Uuid::new_v4());
        let generated: Vec<String> = board.letters().iter().map(|l| l.id.clone()).collect();

        // Act
        board.shuffle(Uuid::new_v4(), &clock, &mut Lcg::with_seed(31_337));
        board.commit();
        board.order(Uuid::new_v4(), &clock);
        board.commit();

        // Assert
        assert_eq!(ids(&board), generated);
        assert_eq!(board.version(), 2);
        for (index, letter) in board.letters().iter().enumerate() {
            assert_eq!(letter.position, index);
        }
    }

    #[test]
    fn test_apply_shuffle_renumbers_positions() {
        let clock = FixedClock(0.0);
        let mut board = ShuffleBoard::with_settings(Uuid::new_v4(), "ABC", 1);
        board.record(
            ShuffleEventKind::LettersShuffled(LettersShuffled {
                board_id: board.id,
                order: vec!["C2-1".to_owned(), "A0-1".to_owned(), "B1-1".to_owned()],
            }),
            Uuid::new_v4(),
            &clock,
        );

        board.commit();

        assert_eq!(ids(&board), ["C2-1", "A0-1", "B1-1"]);
        assert_eq!(board.letters()[0].initial_position, 2);
        assert_eq!(board.letters()[0].position, 0);
    }

    #[test]
    fn test_shuffle_on_empty_board_records_empty_order() {
        let mut board = ShuffleBoard::with_settings(Uuid::new_v4(), "", 3);

        board.shuffle(Uuid::new_v4(), &FixedClock(0.0), &mut Lcg::with_seed(1));
        let events = board.commit();

        match &events[0].kind {
            ShuffleEventKind::LettersShuffled(payload) => assert!(payload.order.is_empty()),
            other => panic!("expected LettersShuffled, got {other:?}"),
        }
        assert!(board.letters().is_empty());
    }

    #[test]
    fn test_change_alphabet_regenerates_with_current_repeat() {
        // Arrange
        let mut board = ShuffleBoard::with_settings(Uuid::new_v4(), "ABC", 2);

        // Act
        board.change_alphabet("XYZW", Uuid::new_v4(), &FixedClock(0.0));
        let events = board.commit();

        // Assert
        assert_eq!(events[0].event_type(), ALPHABET_CHANGED_EVENT_TYPE);
        assert_eq!(board.alphabet(), "XYZW");
        assert_eq!(board.letters().len(), 8);
        assert_eq!(board.letters()[0].id, "X0-1");
    }

    #[test]
    fn test_change_repeat_clamps_requested_value() {
        // Arrange
        let mut board = ShuffleBoard::new(Uuid::new_v4());

        // Act
        board.change_repeat(0, Uuid::new_v4(), &FixedClock(0.0));
        let events = board.commit();

        // Assert
        assert_eq!(events[0].event_type(), REPEAT_CHANGED_EVENT_TYPE);
        match &events[0].kind {
            ShuffleEventKind::RepeatChanged(payload) => assert_eq!(payload.repeat, 1),
            other => panic!("expected RepeatChanged, got {other:?}"),
        }
        assert_eq!(board.repeat(), 1);
        assert_eq!(board.letters().len(), 3);
    }

    #[test]
    fn test_increment_repeat_returns_error_at_maximum() {
        let mut board = ShuffleBoard::with_settings(Uuid::new_v4(), "A", 10);

        let result = board.increment_repeat(Uuid::new_v4(), &FixedClock(0.0));

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("maximum")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(board.uncommitted_events().is_empty());
    }

    #[test]
    fn test_decrement_repeat_returns_error_at_minimum() {
        let mut board = ShuffleBoard::with_settings(Uuid::new_v4(), "A", 1);

        let result = board.decrement_repeat(Uuid::new_v4(), &FixedClock(0.0));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_increment_and_decrement_step_by_one() {
        let clock = FixedClock(0.0);
        let mut board = ShuffleBoard::new(Uuid::new_v4());

        board.increment_repeat(Uuid::new_v4(), &clock).unwrap();
        board.commit();
        assert_eq!(board.repeat(), 4);

        board.decrement_repeat(Uuid::new_v4(), &clock).unwrap();
        board.commit();
        assert_eq!(board.repeat(), 3);
    }

    #[test]
    fn test_sequence_numbers_count_pending_events() {
        let clock = FixedClock(0.0);
        let mut board = ShuffleBoard::new(Uuid::new_v4());

        board.order(Uuid::new_v4(), &clock);
        board.order(Uuid::new_v4(), &clock);

        let numbers: Vec<i64> = board
            .uncommitted_events()
            .iter()
            .map(|e| e.metadata().sequence_number)
            .collect();
        assert_eq!(numbers, [1, 2]);
    }
}
