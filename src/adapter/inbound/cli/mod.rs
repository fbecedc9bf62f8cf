//! CLI module graph.

pub mod check;
pub mod command;
pub mod lookup;
pub mod output;
pub mod run;
