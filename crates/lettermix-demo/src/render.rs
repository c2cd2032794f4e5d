//! Text rendering of the two board panels.

use lettermix_collect::application::query_handlers::CollectBoardView;
use lettermix_shuffle::application::query_handlers::ShuffleBoardView;

use crate::controls::{Button, Size, Variant, render_row};

fn repeat_controls(repeat: usize, can_decrement: bool, can_increment: bool) -> String {
    let minus = Button::new("-")
        .variant(Variant::Ghost)
        .size(Size::Sm)
        .disabled(!can_decrement);
    let plus = Button::new("+")
        .variant(Variant::Ghost)
        .size(Size::Sm)
        .disabled(!can_increment);
    format!("Repeat: {} {repeat} {}", minus.render(), plus.render())
}

fn tiles(letters: impl Iterator<Item = char>) -> String {
    let row: Vec<String> = letters.map(|letter| format!("[{letter}]")).collect();
    if row.is_empty() {
        "(empty)".to_owned()
    } else {
        row.join(" ")
    }
}

/// Renders the shuffle board panel.
#[must_use]
pub fn shuffle_panel(view: &ShuffleBoardView) -> Vec<String> {
    vec![
        "== Algorithm A ==".to_owned(),
        format!("Alphabet: {}", view.alphabet),
        repeat_controls(view.repeat, view.can_decrement, view.can_increment),
        tiles(view.letters.iter().map(|l| l.letter)),
        render_row(&[
            Button::new("Shuffle letters"),
            Button::new("Order letters").variant(Variant::Ghost),
        ]),
    ]
}

/// Renders the collect board panel.
#[must_use]
pub fn collect_panel(view: &CollectBoardView) -> Vec<String> {
    let tallies: Vec<String> = view
        .tallies
        .iter()
        .map(|tally| format!("{}:{}", tally.letter, tally.saved))
        .collect();
    vec![
        "== Algorithm B ==".to_owned(),
        format!("Alphabet: {}", view.alphabet),
        repeat_controls(view.repeat, view.can_decrement, view.can_increment),
        render_row(&[
            Button::new("Save random letter").disabled(!view.can_save),
            Button::new("Reset letters").variant(Variant::Ghost),
        ]),
        tiles(view.unsaved.iter().map(|l| l.letter)),
        format!("Saved: {}", tallies.join(" ")),
    ]
}
