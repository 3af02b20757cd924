//! Client-side state for the Nirvaha frontend

use crate::types::ProductCategory;

mod board;
mod rotation;

pub use board::*;
pub use rotation::*;

/// Category filter for the marketplace grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Meditation,
    Yoga,
    Wellness,
    Books,
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Meditation => "Meditation",
            CategoryFilter::Yoga => "Yoga",
            CategoryFilter::Wellness => "Wellness",
            CategoryFilter::Books => "Books",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "\u{1F6CD}\u{FE0F}", // 🛍️
            CategoryFilter::Meditation => "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}", // 🧘‍♀️
            CategoryFilter::Yoga => "\u{1F9D8}\u{200D}\u{2642}\u{FE0F}", // 🧘‍♂️
            CategoryFilter::Wellness => "\u{1F33F}",    // 🌿
            CategoryFilter::Books => "\u{1F4DA}",       // 📚
        }
    }

    pub fn variants() -> &'static [CategoryFilter] {
        &[
            CategoryFilter::All,
            CategoryFilter::Meditation,
            CategoryFilter::Yoga,
            CategoryFilter::Wellness,
            CategoryFilter::Books,
        ]
    }

    /// Whether a product in `category` passes this filter.
    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Meditation => category == ProductCategory::Meditation,
            CategoryFilter::Yoga => category == ProductCategory::Yoga,
            CategoryFilter::Wellness => category == ProductCategory::Wellness,
            CategoryFilter::Books => category == ProductCategory::Books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_matches_everything() {
        for category in [
            ProductCategory::Meditation,
            ProductCategory::Yoga,
            ProductCategory::Wellness,
            ProductCategory::Books,
        ] {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_specific_filters_are_exclusive() {
        assert!(CategoryFilter::Books.matches(ProductCategory::Books));
        assert!(!CategoryFilter::Books.matches(ProductCategory::Yoga));
    }
}
