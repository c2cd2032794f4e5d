//! Domain layer for the shuffle board.

pub mod aggregates;
pub mod commands;
pub mod events;
