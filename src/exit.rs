// src/exit.rs
//! Standardized process exit codes for `chainrank`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::ChainRankError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ChainRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, unexpected failure).
    Error = 1,
    /// Input tables or configuration violated a precondition.
    InvalidInput = 2,
}

impl ChainRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ChainRankError>() {
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for ChainRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
