//! I/O helpers for mailroom: configuration and letter files.

pub mod config;
pub mod letters;
