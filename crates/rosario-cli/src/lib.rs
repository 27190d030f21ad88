//! Terminal front end components for the Rosario prayer companion.

pub mod logging;
pub mod render;
pub mod repl;
