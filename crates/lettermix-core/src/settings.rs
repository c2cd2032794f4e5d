//! Board settings shared by both letter boards.

/// Alphabet a fresh board starts with.
pub const DEFAULT_ALPHABET: &str = "ABC";
/// Repeat count a fresh board starts with.
pub const DEFAULT_REPEAT: usize = 3;
/// Lowest allowed repeat count.
pub const MIN_REPEAT: usize = 1;
/// Highest allowed repeat count.
pub const MAX_REPEAT: usize = 10;

/// Clamps a requested repeat count into `[MIN_REPEAT, MAX_REPEAT]`.
#[must_use]
pub fn clamp_repeat(requested: usize) -> usize {
    requested.clamp(MIN_REPEAT, MAX_REPEAT)
}

/// Whether the "+" control is enabled for the current repeat count.
#[must_use]
pub fn can_increment(repeat: usize) -> bool {
    repeat < MAX_REPEAT
}

/// Whether the "-" control is enabled for the current repeat count.
#[must_use]
pub fn can_decrement(repeat: usize) -> bool {
    repeat > MIN_REPEAT
}
