//! Discussion room card

use dioxus::prelude::*;

use crate::types::Room;

#[derive(Props, Clone, PartialEq)]
pub struct RoomCardProps {
    pub room: Room,
    pub is_active: bool,
    pub on_select: EventHandler<Room>,
}

/// One room in the grid. The whole card is clickable and reports the
/// room back through `on_select`.
#[component]
pub fn RoomCard(props: RoomCardProps) -> Element {
    let on_select = props.on_select;
    let selected = props.room.clone();
    let border = if props.is_active {
        "border-primary"
    } else {
        "border-primary/20 hover:border-primary/40"
    };

    rsx! {
        div {
            class: "bg-dark-100 rounded-2xl p-6 border {border} transition-all cursor-pointer",
            onclick: move |_| on_select.call(selected.clone()),
            div { class: "flex items-start gap-4",
                span { class: "text-4xl", "{props.room.icon}" }
                div { class: "flex-1",
                    h3 { class: "text-xl font-semibold text-white mb-2", "{props.room.title}" }
                    p { class: "text-gray-400 mb-4", "{props.room.description}" }
                    div { class: "flex items-center gap-4 text-sm text-gray-500",
                        span { "\u{1F465} {props.room.participants} active" } // 👥
                        span { "\u{2022}" }
                        span { "\u{1F552} {props.room.last_active}" } // 🕒
                    }
                }
            }
        }
    }
}

/// Loading placeholder matching the card layout.
#[component]
pub fn RoomCardSkeleton() -> Element {
    rsx! {
        div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 animate-pulse",
            div { class: "flex items-start gap-4",
                div { class: "w-10 h-10 bg-dark-200 rounded-full" }
                div { class: "flex-1 space-y-3",
                    div { class: "h-5 bg-dark-200 rounded w-1/2" }
                    div { class: "h-4 bg-dark-200 rounded w-full" }
                    div { class: "h-4 bg-dark-200 rounded w-1/3" }
                }
            }
        }
    }
}
