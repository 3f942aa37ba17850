//! Root application component

use dioxus::prelude::*;

use crate::components::ToastProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Toast context provider wraps the entire app
        ToastProvider {
            Router::<Route> {}
        }
    }
}
