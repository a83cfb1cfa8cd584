//! CLI library components for Resume Studio.

pub mod logging;
