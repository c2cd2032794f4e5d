//! Lettermix: Shuffle board (Algorithm A) bounded context.
//!
//! Lays an alphabet out as a row of repeated letters and lets the user
//! shuffle the row, restore its original order, edit the alphabet, or step
//! the repeat count. Every change is recorded as an event carrying the new
//! layout so a renderer can animate from the old one.

pub mod application;
pub mod domain;
