//! Wellness marketplace page

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::{ProductCard, ProductCardSkeleton};
use crate::state::CategoryFilter;
use crate::types::Product;

#[component]
pub fn Marketplace() -> Element {
    let products = use_server_future(fetch_products)?;
    let mut active_filter = use_signal(CategoryFilter::default);

    // Products passing the active category filter.
    let filtered = use_memo(move || {
        let filter = active_filter();
        match products.read().as_ref() {
            Some(Ok(list)) => list
                .iter()
                .filter(|p| filter.matches(p.category))
                .cloned()
                .collect::<Vec<Product>>(),
            _ => Vec::new(),
        }
    });

    let category_counts = use_memo(move || {
        let mut counts: HashMap<CategoryFilter, usize> = HashMap::new();
        if let Some(Ok(list)) = products.read().as_ref() {
            for filter in CategoryFilter::variants() {
                let count = list.iter().filter(|p| filter.matches(p.category)).count();
                counts.insert(*filter, count);
            }
        }
        counts
    });

    rsx! {
        div { class: "min-h-screen bg-dark-300 pt-24 pb-12 px-4",
            div { class: "max-w-6xl mx-auto",
                div { class: "text-center mb-12",
                    h1 { class: "text-4xl font-bold text-white mb-4", "Wellness Marketplace" }
                    p { class: "text-gray-400 max-w-2xl mx-auto",
                        "Discover handpicked wellness products curated by our experts to support \
                         your spiritual journey."
                    }
                }

                div { class: "flex flex-wrap justify-center gap-3 mb-12",
                    for filter in CategoryFilter::variants() {
                        {
                            let filter = *filter;
                            let pill_class = if filter == active_filter() {
                                "flex items-center gap-2 px-5 py-2 rounded-full font-medium transition-colors bg-primary text-dark-300"
                            } else {
                                "flex items-center gap-2 px-5 py-2 rounded-full font-medium transition-colors bg-dark-100 text-white hover:bg-dark-200"
                            };
                            let count = category_counts().get(&filter).copied().unwrap_or(0);
                            rsx! {
                                button {
                                    key: "{filter.label()}",
                                    class: "{pill_class}",
                                    onclick: move |_| active_filter.set(filter),
                                    span { "{filter.icon()}" }
                                    span { "{filter.label()}" }
                                    if filter != CategoryFilter::All && count > 0 {
                                        span { class: "text-xs opacity-75", "({count})" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-12",
                    {
                        match &*products.read() {
                            None => rsx! {
                                for index in 0..6 {
                                    ProductCardSkeleton { key: "{index}" }
                                }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "md:col-span-2 lg:col-span-3 bg-dark-100 rounded-2xl p-8 border border-red-500/30 text-center",
                                    p { class: "text-red-400", "Failed to load products: {err}" }
                                }
                            },
                            Some(Ok(_)) => rsx! {
                                for product in filtered() {
                                    ProductCard { key: "{product.id}", product: product.clone() }
                                }
                            },
                        }
                    }
                }

                div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 text-center",
                    div { class: "text-3xl mb-3", "\u{1F4AB}" } // 💫
                    h3 { class: "text-lg font-semibold text-white mb-2", "Support Our Mission" }
                    p { class: "text-gray-400 text-sm max-w-2xl mx-auto",
                        "Every purchase you make through our marketplace helps support Nirvaha's \
                         mission to make spiritual growth accessible to everyone. We carefully \
                         select products that align with our values and have been tested by our \
                         community."
                    }
                }
            }
        }
    }
}

/// Server function returning the product catalog.
#[server]
async fn fetch_products() -> Result<Vec<Product>, ServerFnError> {
    tracing::debug!("serving marketplace catalog");
    Ok(crate::catalog::products())
}
