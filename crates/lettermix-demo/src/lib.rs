//! Lettermix demo: terminal front end for the shuffle and collect boards.

pub mod config;
pub mod controls;
pub mod render;
pub mod walkthrough;
