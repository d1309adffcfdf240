//! CTIR model indicator for the Claude Code footer.
//!
//! The indicator text comes from an external command. The hook binary
//! answers Claude Code tool events with it (through a short-lived file
//! cache), and the `demo` subcommand draws it in a bordered footer panel.

pub mod cache;
pub mod config;
pub mod demo;
pub mod hook;
pub mod indicator;
pub mod logging;
pub mod ui;
