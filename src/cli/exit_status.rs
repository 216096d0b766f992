use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Run completed and outputs were written (or reported in dry-run)
/// - `Error` (2): Run failed (unreadable file, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed successfully.
    Success,
    /// Run failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
