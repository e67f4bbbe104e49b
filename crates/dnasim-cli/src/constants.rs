//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Preset not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, arguments or base mapping.
    pub const INVALID_INPUT: i32 = 4;
}
