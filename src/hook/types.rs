use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tool name used when the payload has none
pub const UNKNOWN_TOOL: &str = "unknown";

/// Payload Claude Code sends to the hook on stdin
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// Tool that just ran
    #[serde(default)]
    pub tool_name: Option<String>,
    /// Tool result (not inspected)
    #[serde(default)]
    pub tool_result: Option<serde_json::Value>,
}

impl HookInput {
    /// Parse exactly one JSON object
    ///
    /// Arrays are rejected even though serde would map them onto the struct.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value)
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or(UNKNOWN_TOOL)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Object written to stdout, exactly once per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookOutput {
    /// Normal result
    Indicator {
        ctir_model_indicator: String,
        /// Unix seconds
        timestamp: f64,
        tool_name: String,
    },
    /// Input could not be handled
    Failure {
        ctir_model_indicator: String,
        error: String,
    },
}

impl HookOutput {
    /// Failure object for `err`
    pub fn failure(err: &HookError) -> Self {
        HookOutput::Failure {
            ctir_model_indicator: err.placeholder().to_string(),
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
impl HookOutput {
    /// Indicator text, whichever shape this is
    pub fn indicator(&self) -> &str {
        match self {
            HookOutput::Indicator {
                ctir_model_indicator,
                ..
            }
            | HookOutput::Failure {
                ctir_model_indicator,
                ..
            } => ctir_model_indicator,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, HookOutput::Failure { .. })
    }
}

/// Failures that change the hook output shape
#[derive(Debug, Error)]
pub enum HookError {
    /// Stdin was not a single JSON object of the expected shape
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Stdin could not be read
    #[error("failed to read hook input: {0}")]
    Input(#[from] std::io::Error),

    /// The output object could not be encoded
    #[error("failed to encode hook output: {0}")]
    Output(serde_json::Error),
}

impl HookError {
    /// Indicator text reported alongside the error
    pub fn placeholder(&self) -> &'static str {
        match self {
            HookError::Parse(_) => "🎭 CTIR: Parse Error",
            HookError::Input(_) | HookError::Output(_) => "🎭 CTIR: Hook Error",
        }
    }
}
