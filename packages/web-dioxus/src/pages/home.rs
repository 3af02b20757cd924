//! Landing page

use dioxus::prelude::*;

use crate::components::TestimonialCarousel;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-dark-300 pt-20",
            section { class: "px-4 pt-20 pb-16 text-center",
                div { class: "max-w-3xl mx-auto",
                    h1 { class: "text-5xl font-bold text-white mb-6",
                        "Find Your "
                        span { class: "text-primary", "Harmony of Mind" }
                    }
                    p { class: "text-xl text-gray-400 mb-10",
                        "Nirvaha brings anonymous discussion rooms, handpicked wellness \
                         products, and a caring community together in one calm space."
                    }
                    div { class: "flex flex-col sm:flex-row items-center justify-center gap-4",
                        Link {
                            to: Route::DiscussionRooms {},
                            class: "px-8 py-3 rounded-full bg-primary text-dark-300 font-semibold hover:bg-primary/90 transition-colors",
                            "Join a Discussion"
                        }
                        Link {
                            to: Route::Marketplace {},
                            class: "px-8 py-3 rounded-full border border-primary/40 text-primary font-semibold hover:border-primary transition-colors",
                            "Browse the Marketplace"
                        }
                    }
                }
            }

            section { class: "px-4 pb-20",
                div { class: "max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6",
                    FeatureCard {
                        icon: "\u{1F4AC}", // 💬
                        title: "Anonymous Rooms",
                        description: "Share what's on your mind without ever revealing who you are.",
                    }
                    FeatureCard {
                        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}", // 🧘‍♀️
                        title: "Guided Wellness",
                        description: "Meditation, yoga, and self-care products picked by our experts.",
                    }
                    FeatureCard {
                        icon: "\u{1F31F}", // 🌟
                        title: "Supportive Community",
                        description: "Encouragement and gratitude from people on the same journey.",
                    }
                }
            }

            section { class: "py-20 bg-dark-200/50",
                TestimonialCarousel {}
            }

            footer { class: "py-10 text-center text-gray-500 text-sm border-t border-primary/10",
                p { "NIRVAHA" }
                p { class: "mt-1", "Harmony of mind, one thought at a time." }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-white mb-2", "{props.title}" }
            p { class: "text-gray-400 text-sm", "{props.description}" }
        }
    }
}
