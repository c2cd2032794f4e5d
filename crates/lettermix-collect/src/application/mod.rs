//! Application layer for the collect board.

pub mod command_handlers;
pub mod query_handlers;
