// src/exit.rs
//! Standardized process exit codes for `digraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DigraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. invalid config, serialization failure).
    Error = 1,
    /// Input graph could not be read or parsed.
    InvalidInput = 2,
}

impl DigraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for DigraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
