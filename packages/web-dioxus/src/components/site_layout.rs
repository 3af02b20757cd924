//! Shared page chrome

use dioxus::prelude::*;

use crate::components::Navbar;
use crate::routes::Route;

/// Wraps every page with the fixed navbar on the dark backdrop.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-dark-300",
            Navbar {}
            Outlet::<Route> {}
        }
    }
}
