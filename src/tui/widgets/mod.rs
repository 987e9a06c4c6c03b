//! Reusable TUI widgets

pub mod bars;
pub mod logo;
pub mod shortcuts;
pub mod spinner;
pub mod tree;
