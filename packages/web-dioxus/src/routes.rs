//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::public::{Home, Register};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/register")]
    Register {},
}
