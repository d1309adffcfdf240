use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Which output form the indicator command should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Single-line indicator for the footer
    Indicator,
    /// Multi-line details
    Details,
}

impl FetchMode {
    /// Argument passed to the indicator command
    pub fn as_arg(&self) -> &'static str {
        match self {
            FetchMode::Indicator => "indicator",
            FetchMode::Details => "details",
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Why a fetch produced no indicator
#[derive(Debug, Error)]
pub enum FetchError {
    /// The command ran and exited unsuccessfully
    #[error("indicator command exited with {}", exit_label(.code, .stderr))]
    Exit { code: Option<i32>, stderr: String },

    /// The command did not finish within the timeout
    #[error("indicator command timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The command does not exist
    #[error("indicator command not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Any other spawn or I/O failure
    #[error("failed to run indicator command: {0}")]
    Invocation(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("code {}", code),
        None => "signal".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

impl FetchError {
    /// Display text shown in place of the indicator
    pub fn placeholder(&self, mode: FetchMode) -> String {
        match mode {
            FetchMode::Indicator => match self {
                FetchError::Exit {
                    code: Some(code), ..
                } => format!("🎭 CTIR: Error ({})", code),
                FetchError::Exit { code: None, .. } => "🎭 CTIR: Error".to_string(),
                FetchError::Timeout { .. } => "🎭 CTIR: Timeout".to_string(),
                FetchError::NotFound { .. } => "🎭 CTIR: Script Not Found".to_string(),
                FetchError::Invocation(_) => "🎭 CTIR: Error".to_string(),
            },
            FetchMode::Details => {
                if self.is_offline() {
                    "Details: Offline".to_string()
                } else {
                    "Details: Error".to_string()
                }
            }
        }
    }

    /// True when the command never produced an exit status
    pub fn is_offline(&self) -> bool {
        !matches!(self, FetchError::Exit { .. })
    }
}
