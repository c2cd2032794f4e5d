//! Domain layer for the collect board.

pub mod aggregates;
pub mod commands;
pub mod events;
