//! Library components for the `csvrep` binary.

pub mod cli;
pub mod logging;
pub mod run;
pub mod table;
