//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{DiscussionRooms, Home, Marketplace};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/discussion-rooms")]
        DiscussionRooms {},

        #[route("/marketplace")]
        Marketplace {},
    #[end_layout]
}
