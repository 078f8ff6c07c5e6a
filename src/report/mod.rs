//! Diagnostics shown alongside the collector output.
//!
//! - [`terminal`]: colored per-status breakdown table, printed with `--verbose`.

pub mod terminal;
