//! Application layer for the shuffle board.

pub mod command_handlers;
pub mod query_handlers;
