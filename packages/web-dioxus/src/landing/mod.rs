//! Landing page content and waitlist capture

mod content;
mod waitlist;

pub use content::*;
pub use waitlist::*;
