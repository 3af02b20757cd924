//! Testimonial carousel

use dioxus::prelude::*;

use crate::catalog;
use crate::state::TestimonialRotation;

/// Rotating testimonial card with dot controls.
///
/// Entries come from the static catalog already ordered by review
/// frequency. In the browser the card advances on a timer; on the server
/// it renders the first entry and hydration takes over from there.
#[component]
pub fn TestimonialCarousel() -> Element {
    let testimonials = catalog::testimonials();
    let count = testimonials.len();
    let mut rotation = use_signal(move || TestimonialRotation::new(count));

    // Advance every five seconds in the browser.
    #[cfg(feature = "web")]
    use_effect(move || {
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(5_000).await;
                rotation.write().advance();
            }
        });
    });

    let current = rotation.read().current();
    let Some(testimonial) = testimonials.get(current).cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "max-w-3xl mx-auto px-4",
            div { class: "text-center mb-10",
                h2 { class: "text-3xl font-bold text-white mb-3", "What Our Users Say" }
                p { class: "text-gray-400",
                    "Stories from people finding their calm with Nirvaha. Have one to share? "
                    a {
                        class: "text-primary hover:underline",
                        href: "mailto:soulverse23@gmail.com",
                        "Contact Us"
                    }
                }
            }

            div { class: "bg-dark-200 rounded-xl p-6 border border-primary/20",
                div { class: "flex items-center gap-4 mb-4",
                    span { class: "text-4xl", "{testimonial.avatar}" }
                    div {
                        h4 { class: "text-white font-semibold", "{testimonial.name}" }
                        p { class: "text-gray-400 text-sm", "{testimonial.role}" }
                        p { class: "text-primary text-xs", "{testimonial.frequency} reviews" }
                    }
                }
                div { class: "flex gap-1 mb-3",
                    for star in 0..testimonial.rating {
                        span { key: "{star}", class: "text-yellow-400", "\u{2605}" } // ★
                    }
                }
                p { class: "text-gray-300 italic", "\"{testimonial.content}\"" }
            }

            div { class: "flex justify-center gap-2 mt-6",
                for index in 0..count {
                    {
                        let dot_class = if index == current {
                            "w-4 h-2 rounded-full transition-all bg-primary"
                        } else {
                            "w-2 h-2 rounded-full transition-all bg-gray-600"
                        };
                        rsx! {
                            button {
                                key: "{index}",
                                class: "{dot_class}",
                                onclick: move |_| rotation.write().select(index),
                            }
                        }
                    }
                }
            }
        }
    }
}
