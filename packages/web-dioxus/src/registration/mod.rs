//! Two-step phone registration: name/phone form, then code verification

#[cfg(not(target_arch = "wasm32"))]
mod backend;
mod controller;
mod countdown;
mod error;
mod machine;
mod server_fns;
mod validate;

#[cfg(not(target_arch = "wasm32"))]
pub use backend::*;
pub use controller::*;
pub use countdown::*;
pub use error::*;
pub use machine::*;
pub use server_fns::*;
pub use validate::*;
