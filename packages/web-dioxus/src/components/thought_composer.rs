//! Composer modal for sharing a thought

use dioxus::prelude::*;

use crate::types::Room;

#[derive(Props, Clone, PartialEq)]
pub struct ThoughtComposerProps {
    pub room: Room,
    pub draft: String,
    pub on_draft_change: EventHandler<String>,
    pub on_submit: EventHandler<()>,
    pub on_close: EventHandler<()>,
}

/// Modal dialog for writing into the selected room. The share button
/// stays disabled while the draft is blank, and clicking the backdrop
/// dismisses without losing the draft.
#[component]
pub fn ThoughtComposer(props: ThoughtComposerProps) -> Element {
    let draft_blank = props.draft.trim().is_empty();

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center px-4",
            div {
                class: "absolute inset-0 bg-black/60 backdrop-blur-sm",
                onclick: move |_| props.on_close.call(()),
            }
            div { class: "relative bg-dark-100 rounded-2xl p-6 border border-primary/20 w-full max-w-lg",
                div { class: "flex items-center justify-between mb-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-3xl", "{props.room.icon}" }
                        div {
                            h3 { class: "text-lg font-semibold text-white", "{props.room.title}" }
                            p { class: "text-xs text-gray-500", "Sharing anonymously" }
                        }
                    }
                    button {
                        class: "text-gray-500 hover:text-white text-xl",
                        onclick: move |_| props.on_close.call(()),
                        "\u{2715}" // ✕
                    }
                }

                form {
                    onsubmit: move |_| props.on_submit.call(()),
                    textarea {
                        class: "w-full h-32 bg-dark-200 border border-primary/20 rounded-lg px-3 py-2 text-white placeholder-gray-500 focus:outline-none focus:border-primary resize-none",
                        placeholder: "What's on your mind? Your thought is shared anonymously.",
                        value: "{props.draft}",
                        oninput: move |event| props.on_draft_change.call(event.value()),
                    }
                    div { class: "flex items-center justify-between mt-4",
                        span { class: "text-xs text-gray-500",
                            "\u{1F512} Anonymous, never linked to you" // 🔒
                        }
                        div { class: "flex gap-2",
                            button {
                                class: "px-4 py-2 rounded-lg text-gray-300 hover:text-white",
                                r#type: "button",
                                onclick: move |_| props.on_close.call(()),
                                "Cancel"
                            }
                            button {
                                class: "px-5 py-2 rounded-lg bg-primary text-dark-300 font-medium hover:bg-primary/90 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                                r#type: "submit",
                                disabled: draft_blank,
                                "Share Anonymously"
                            }
                        }
                    }
                }
            }
        }
    }
}
