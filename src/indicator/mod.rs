//! Indicator fetching
//!
//! Runs the external indicator command with a bounded wait. Failures are
//! tagged with a [`FetchError`] so callers can tell a timeout from a
//! missing script, and only turn them into display text at the edge.

mod source;
mod types;

pub use source::{fetch_or_placeholder, CommandSource, IndicatorSource};
pub use types::{FetchError, FetchMode};
