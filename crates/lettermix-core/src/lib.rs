//! Lettermix Core: shared abstractions for the letter boards.
//!
//! This crate defines the clock and random number seams, the seeded
//! generator both boards draw from, and the event/aggregate traits the
//! bounded contexts build on. It contains no board logic.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod rng;
pub mod settings;
