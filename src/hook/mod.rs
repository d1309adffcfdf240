//! Claude Code hook adapter
//!
//! One process per tool event: read the payload from stdin, answer with
//! the current indicator on stdout. Diagnostics go to stderr only.

mod adapter;
mod types;

pub use adapter::HookAdapter;
pub use types::{HookError, HookInput, HookOutput, UNKNOWN_TOOL};
