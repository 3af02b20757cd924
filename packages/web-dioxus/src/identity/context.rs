//! Identity context
//!
//! The signal starts out empty and nothing in the discussion flow ever
//! fills it in. Thoughts, replies, and reactions are stored without any
//! member reference; the navbar only shows a profile badge when a user
//! happens to be present.

use dioxus::prelude::*;

use crate::types::CurrentUser;

#[derive(Clone, Copy)]
pub struct IdentityContext {
    pub user: Signal<Option<CurrentUser>>,
}

/// Provides [`IdentityContext`] to the component tree.
#[component]
pub fn IdentityProvider(children: Element) -> Element {
    let user = use_signal(|| None);
    use_context_provider(|| IdentityContext { user });

    children
}

/// Hook to access the identity context.
pub fn use_identity() -> IdentityContext {
    use_context::<IdentityContext>()
}
