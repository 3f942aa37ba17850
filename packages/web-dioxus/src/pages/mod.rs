//! Page components

pub mod public;
