//! Donor tracking with a console menu, summary reports and thank-you letters.
//!
//! The architecture follows a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (money, donor registry, report
//!   formatting, menu parsing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration files, letter files).
//!
//! [`shell`] coordinates core logic with I/O to drive the interactive session.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
