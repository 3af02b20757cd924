//! Root application component

use dioxus::prelude::*;

use crate::identity::IdentityProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Identity context provider wraps the entire app
        IdentityProvider {
            Router::<Route> {}
        }
    }
}
