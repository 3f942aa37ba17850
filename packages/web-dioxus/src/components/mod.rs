//! Reusable UI components

mod icon;
mod toast;

pub use icon::*;
pub use toast::*;
