use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tracing::{debug, warn};

use super::types::{FetchError, FetchMode};
use crate::config::Settings;

/// Trait for indicator producers (the process call, or an in-process stand-in)
pub trait IndicatorSource: Send + Sync {
    /// Fetch the indicator text in the requested form
    fn fetch(&self, mode: FetchMode) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Indicator source backed by the external indicator command
#[derive(Debug, Clone)]
pub struct CommandSource {
    /// Program to run
    program: PathBuf,
    /// Arguments placed before the mode argument
    args: Vec<String>,
    /// Upper bound on one call
    timeout: Duration,
}

impl CommandSource {
    /// Create a new CommandSource for the given program and timeout
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout,
        }
    }

    /// Build from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.indicator_command, settings.command_timeout())
            .with_args(settings.indicator_args.clone())
    }

    /// Set the leading arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Whether the program was given as a path rather than a bare name looked up on PATH
    fn is_explicit_path(&self) -> bool {
        self.program.is_absolute() || self.program.components().count() > 1
    }

    fn not_found(&self) -> FetchError {
        FetchError::NotFound {
            path: self.program.clone(),
        }
    }
}

impl IndicatorSource for CommandSource {
    /// Run `<program> [args...] <mode>` and return its trimmed stdout
    async fn fetch(&self, mode: FetchMode) -> Result<String, FetchError> {
        if self.is_explicit_path() && !self.program.exists() {
            return Err(self.not_found());
        }

        let child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(mode.as_arg())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => self.not_found(),
                _ => FetchError::Invocation(e),
            })?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(FetchError::Invocation(e)),
            Err(_) => {
                return Err(FetchError::Timeout {
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            return Err(FetchError::Exit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(mode = %mode, "Indicator command returned {} bytes", text.len());
        Ok(text)
    }
}

/// Fetch and degrade any failure to its placeholder text
pub async fn fetch_or_placeholder<S: IndicatorSource>(source: &S, mode: FetchMode) -> String {
    match source.fetch(mode).await {
        Ok(text) => text,
        Err(e) => {
            warn!(mode = %mode, "Indicator fetch failed: {}", e);
            e.placeholder(mode)
        }
    }
}
