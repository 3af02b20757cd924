//! Anonymous discussion rooms page
//!
//! Rooms load through a server function. Everything after that is
//! session-local: the thought feed lives in a [`ThoughtBoard`] signal and
//! never leaves the browser.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::{RoomCard, RoomCardSkeleton, ThoughtCard, ThoughtComposer};
use crate::state::{SortMode, ThoughtBoard};
use crate::types::{ReactionKind, Room};

#[component]
pub fn DiscussionRooms() -> Element {
    let rooms = use_server_future(fetch_rooms)?;
    let mut board = use_signal(ThoughtBoard::new);

    let composer_room = board.read().composer_room();
    let thought_draft = board.read().thought_draft().to_string();
    let sort_mode = board.read().sort_mode();
    let feed = board.read().sorted_thoughts();
    let thought_count = board.read().thoughts().len();
    let active_room_id = board.read().active_room().map(|r| r.id);

    // Room titles for the feed badges, keyed by room id.
    let room_titles = use_memo(move || {
        let mut titles: HashMap<u32, String> = HashMap::new();
        if let Some(Ok(room_list)) = rooms.read().as_ref() {
            for room in room_list {
                titles.insert(room.id, room.title.clone());
            }
        }
        titles
    });

    rsx! {
        div { class: "min-h-screen bg-dark-300 pt-24 pb-12 px-4",
            div { class: "max-w-4xl mx-auto",
                div { class: "text-center mb-12",
                    h1 { class: "text-4xl font-bold text-white mb-4", "Anonymous Discussion Rooms" }
                    p { class: "text-gray-400 max-w-2xl mx-auto",
                        "Share your thoughts, ask questions, and seek support in a safe, anonymous space."
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-12",
                    {
                        match &*rooms.read() {
                            None => rsx! {
                                for index in 0..4 {
                                    RoomCardSkeleton { key: "{index}" }
                                }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "md:col-span-2 bg-dark-100 rounded-2xl p-8 border border-red-500/30 text-center",
                                    p { class: "text-red-400", "Failed to load rooms: {err}" }
                                }
                            },
                            Some(Ok(room_list)) => rsx! {
                                for room in room_list.iter() {
                                    {
                                        let is_active = active_room_id == Some(room.id);
                                        rsx! {
                                            RoomCard {
                                                key: "{room.id}",
                                                room: room.clone(),
                                                is_active: is_active,
                                                on_select: move |picked: Room| board.write().select_room(picked),
                                            }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }

                if let Some(room) = composer_room {
                    ThoughtComposer {
                        room: room,
                        draft: thought_draft.clone(),
                        on_draft_change: move |text: String| board.write().set_thought_draft(text),
                        on_submit: move |_| {
                            let draft = board.peek().thought_draft().to_string();
                            board.write().submit_thought(&draft);
                        },
                        on_close: move |_| board.write().close_composer(),
                    }
                }

                div { class: "flex items-center justify-between mb-6",
                    div { class: "flex items-center gap-3",
                        h2 { class: "text-2xl font-semibold text-white", "Recent Thoughts" }
                        if thought_count > 0 {
                            span { class: "px-2 py-0.5 rounded-full bg-primary/10 text-primary text-xs",
                                "{thought_count}"
                            }
                        }
                    }
                    div { class: "flex gap-2",
                        for mode in SortMode::variants() {
                            {
                                let mode = *mode;
                                let tab_class = if mode == sort_mode {
                                    "px-3 py-1 rounded-full text-sm bg-primary text-dark-300 font-medium"
                                } else {
                                    "px-3 py-1 rounded-full text-sm bg-dark-100 text-gray-300 hover:bg-dark-200"
                                };
                                rsx! {
                                    button {
                                        key: "{mode.label()}",
                                        class: "{tab_class}",
                                        onclick: move |_| board.write().set_sort_mode(mode),
                                        "{mode.label()}"
                                    }
                                }
                            }
                        }
                    }
                }

                if feed.is_empty() {
                    div { class: "bg-dark-100 rounded-2xl p-10 border border-primary/20 text-center mb-12",
                        div { class: "text-4xl mb-3", "\u{1F4AC}" } // 💬
                        p { class: "text-white font-medium mb-1", "No thoughts yet" }
                        p { class: "text-gray-400 text-sm", "Pick a room above and be the first to share." }
                    }
                } else {
                    div { class: "space-y-6 mb-12",
                        for thought in feed.iter() {
                            {
                                let thought_id = thought.id;
                                let room_title = room_titles()
                                    .get(&thought.room_id)
                                    .cloned()
                                    .unwrap_or_else(|| "Discussion".to_string());
                                let reply_draft = board.read().reply_draft(thought_id).to_string();
                                rsx! {
                                    ThoughtCard {
                                        key: "{thought_id}",
                                        thought: thought.clone(),
                                        room_title: room_title,
                                        reply_draft: reply_draft,
                                        on_react: move |kind: ReactionKind| {
                                            board.write().add_reaction(thought_id, kind)
                                        },
                                        on_draft_change: move |text: String| {
                                            board.write().set_reply_draft(thought_id, text)
                                        },
                                        on_reply: move |_| {
                                            let draft = board.peek().reply_draft(thought_id).to_string();
                                            board.write().submit_reply(thought_id, &draft);
                                        },
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 text-center",
                    div { class: "text-3xl mb-3", "\u{1F512}" } // 🔒
                    h3 { class: "text-lg font-semibold text-white mb-2", "Your Privacy is Protected" }
                    p { class: "text-gray-400 text-sm max-w-2xl mx-auto",
                        "All discussions are completely anonymous. Your identity is never revealed, \
                         and all messages are encrypted. Our moderators ensure a safe and supportive \
                         environment for everyone."
                    }
                }
            }
        }
    }
}

/// Server function returning the discussion room catalog.
#[server]
async fn fetch_rooms() -> Result<Vec<Room>, ServerFnError> {
    tracing::debug!("serving discussion room catalog");
    Ok(crate::catalog::rooms())
}
