//! Shared CLI utilities and types

pub mod check;
pub mod completions;
pub mod display;
