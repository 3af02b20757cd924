//! Marketplace product card

use dioxus::prelude::*;

use crate::types::Product;

#[derive(Props, Clone, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    rsx! {
        div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 hover:border-primary/40 transition-all",
            div { class: "text-6xl mb-4 text-center", "{props.product.image}" }
            h3 { class: "text-lg font-semibold text-white mb-2", "{props.product.name}" }
            p { class: "text-gray-400 text-sm mb-4", "{props.product.description}" }
            div { class: "flex items-center gap-1 mb-4",
                span { class: "text-yellow-400", "\u{2605}" } // ★
                span { class: "text-white", "{props.product.rating}" }
                span { class: "text-gray-500 text-sm", "({props.product.reviews} reviews)" }
            }
            div { class: "flex items-center justify-between",
                span { class: "text-xl font-bold text-primary", "{props.product.price}" }
                button { class: "px-4 py-2 bg-primary text-dark-300 rounded-lg font-medium hover:bg-primary/90 transition-colors",
                    "View Details"
                }
            }
        }
    }
}

/// Loading placeholder matching the card layout.
#[component]
pub fn ProductCardSkeleton() -> Element {
    rsx! {
        div { class: "bg-dark-100 rounded-2xl p-6 border border-primary/20 animate-pulse",
            div { class: "w-16 h-16 bg-dark-200 rounded-full mx-auto mb-4" }
            div { class: "h-5 bg-dark-200 rounded w-2/3 mb-3" }
            div { class: "h-4 bg-dark-200 rounded w-full mb-2" }
            div { class: "h-4 bg-dark-200 rounded w-1/2 mb-4" }
            div { class: "flex items-center justify-between",
                div { class: "h-6 bg-dark-200 rounded w-16" }
                div { class: "h-9 bg-dark-200 rounded w-24" }
            }
        }
    }
}
