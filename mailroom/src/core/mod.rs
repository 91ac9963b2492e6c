//! Deterministic, pure logic for donor bookkeeping.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod donor;
pub mod menu;
pub mod money;
pub mod registry;
pub mod report;
