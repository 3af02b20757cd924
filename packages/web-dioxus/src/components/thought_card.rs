//! Thought card for the discussion feed
//!
//! Renders one anonymous thought with its room badge, reaction bar, and
//! reply thread. All mutations flow up through event handlers; the card
//! itself owns no state.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::types::{ReactionKind, Thought};

#[derive(Props, Clone, PartialEq)]
pub struct ThoughtCardProps {
    pub thought: Thought,
    pub room_title: String,
    pub reply_draft: String,
    pub on_react: EventHandler<ReactionKind>,
    pub on_draft_change: EventHandler<String>,
    pub on_reply: EventHandler<()>,
}

#[component]
pub fn ThoughtCard(props: ThoughtCardProps) -> Element {
    let reply_blank = props.reply_draft.trim().is_empty();

    rsx! {
        div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20",
            div { class: "flex items-center justify-between mb-3",
                span {
                    class: "px-3 py-1 rounded-full bg-primary/10 text-primary text-xs font-medium",
                    "{props.room_title}"
                }
                span { class: "text-sm text-gray-500",
                    "{format_time_ago(&props.thought.created_at)}"
                }
            }

            p { class: "text-gray-200 whitespace-pre-line mb-4", "{props.thought.content}" }

            div { class: "flex items-center gap-2 mb-4",
                for kind in ReactionKind::variants() {
                    {
                        let kind = *kind;
                        let count = props.thought.reactions.get(&kind).copied().unwrap_or(0);
                        rsx! {
                            button {
                                class: "flex items-center gap-1 px-3 py-1 rounded-full bg-dark-200 border border-primary/10 hover:border-primary/40 transition-colors",
                                title: "{kind.label()}",
                                onclick: move |_| props.on_react.call(kind),
                                span { "{kind.emoji()}" }
                                if count > 0 {
                                    span { class: "text-xs text-gray-400", "{count}" }
                                }
                            }
                        }
                    }
                }
            }

            if !props.thought.replies.is_empty() {
                div { class: "border-l-2 border-primary/20 pl-4 space-y-3 mb-4",
                    for reply in props.thought.replies.iter() {
                        div { key: "{reply.id}",
                            p { class: "text-gray-300 text-sm", "{reply.content}" }
                            span { class: "text-xs text-gray-500",
                                "{format_time_ago(&reply.created_at)}"
                            }
                        }
                    }
                }
            }

            form {
                class: "flex gap-2",
                onsubmit: move |_| props.on_reply.call(()),
                input {
                    class: "flex-1 bg-dark-200 border border-primary/20 rounded-lg px-3 py-2 text-sm text-white placeholder-gray-500 focus:outline-none focus:border-primary",
                    r#type: "text",
                    placeholder: "Reply anonymously...",
                    value: "{props.reply_draft}",
                    oninput: move |event| props.on_draft_change.call(event.value()),
                }
                button {
                    class: "px-4 py-2 rounded-lg bg-primary/10 text-primary text-sm font-medium hover:bg-primary/20 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                    r#type: "submit",
                    disabled: reply_blank,
                    "Reply"
                }
            }
        }
    }
}

/// Relative timestamp for feed entries.
pub fn format_time_ago(timestamp: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*timestamp);

    if delta.num_minutes() < 1 {
        "Just now".to_string()
    } else if delta.num_minutes() == 1 {
        "1 minute ago".to_string()
    } else if delta.num_minutes() < 60 {
        format!("{} minutes ago", delta.num_minutes())
    } else if delta.num_hours() == 1 {
        "1 hour ago".to_string()
    } else if delta.num_hours() < 24 {
        format!("{} hours ago", delta.num_hours())
    } else if delta.num_days() == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", delta.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_time_ago_recent() {
        let now = Utc::now();
        assert_eq!(format_time_ago(&(now - Duration::seconds(10))), "Just now");
        assert_eq!(format_time_ago(&(now - Duration::minutes(1))), "1 minute ago");
        assert_eq!(format_time_ago(&(now - Duration::minutes(5))), "5 minutes ago");
    }

    #[test]
    fn test_format_time_ago_hours_and_days() {
        let now = Utc::now();
        assert_eq!(format_time_ago(&(now - Duration::hours(3))), "3 hours ago");
        assert_eq!(format_time_ago(&(now - Duration::days(1))), "Yesterday");
        assert_eq!(format_time_ago(&(now - Duration::days(4))), "4 days ago");
    }
}
