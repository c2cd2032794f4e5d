//! Lettermix: Collect board (Algorithm B) bounded context.
//!
//! Holds a pool of repeated letters and moves one randomly chosen unsaved
//! letter at a time into a per-letter tally. Tallies survive alphabet edits
//! for letters kept in the new alphabet and are cleared by a reset or a
//! repeat change.

pub mod application;
pub mod domain;
