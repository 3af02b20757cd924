//! Site navigation bar

use dioxus::prelude::*;

use crate::identity::use_identity;
use crate::routes::Route;

/// Fixed top navigation with the Nirvaha brand, page links, and an
/// optional profile badge when someone is signed in.
#[component]
pub fn Navbar() -> Element {
    let identity = use_identity();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 bg-dark-300/80 backdrop-blur-lg shadow-lg",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-20",
                    Link { to: Route::Home {}, class: "flex flex-col",
                        span { class: "text-2xl font-bold tracking-wider text-white", "NIRVAHA" }
                        span { class: "text-xs tracking-widest text-primary", "HARMONY OF MIND" }
                    }

                    div { class: "hidden md:flex items-center space-x-8",
                        NavLink { to: Route::Home {}, label: "Home" }
                        NavLink { to: Route::DiscussionRooms {}, label: "Discussion Rooms" }
                        NavLink { to: Route::Marketplace {}, label: "Marketplace" }

                        if let Some(user) = identity.user.read().as_ref() {
                            span {
                                class: "flex items-center gap-2 px-3 py-1 rounded-full bg-dark-100 border border-primary/20 text-sm text-gray-300",
                                span { "\u{1F464}" } // 👤
                                "{user.display_name}"
                            }
                        }
                    }

                    button {
                        class: "md:hidden text-gray-300 hover:text-white text-2xl",
                        onclick: move |_| {
                            let open = *menu_open.peek();
                            menu_open.set(!open);
                        },
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            if menu_open() {
                div { class: "md:hidden bg-dark-200 border-t border-primary/20 px-4 py-3 space-y-1",
                    MobileNavLink {
                        to: Route::Home {},
                        label: "Home",
                        on_navigate: move |_| menu_open.set(false),
                    }
                    MobileNavLink {
                        to: Route::DiscussionRooms {},
                        label: "Discussion Rooms",
                        on_navigate: move |_| menu_open.set(false),
                    }
                    MobileNavLink {
                        to: Route::Marketplace {},
                        label: "Marketplace",
                        on_navigate: move |_| menu_open.set(false),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let link_class = if route == props.to {
        "text-primary font-medium"
    } else {
        "text-gray-300 hover:text-white transition-colors"
    };

    rsx! {
        Link { to: props.to.clone(), class: "{link_class}", "{props.label}" }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MobileNavLinkProps {
    to: Route,
    label: &'static str,
    on_navigate: EventHandler<()>,
}

/// Mobile menu entry. Navigates imperatively so the menu can close on
/// the same click.
#[component]
fn MobileNavLink(props: MobileNavLinkProps) -> Element {
    let MobileNavLinkProps { to, label, on_navigate } = props;
    let navigator = use_navigator();

    rsx! {
        button {
            class: "block w-full text-left px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-dark-100",
            onclick: move |_| {
                on_navigate.call(());
                navigator.push(to.clone());
            },
            "{label}"
        }
    }
}
