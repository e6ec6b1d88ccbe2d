//! Theme Module
//!
//! Color constants for the articles desk. Views pull colors from here rather
//! than hard-coding them.

pub mod colors;

pub use colors::*;
