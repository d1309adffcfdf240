//! Demo mode: a footer panel redrawn on a fixed interval

pub mod content;
mod runner;

pub use runner::DemoRunner;
