//! Command implementations for the scorebook CLI

pub mod serve;

pub use serve::run_serve;
