//! Marketplace product catalog

use crate::types::{Product, ProductCategory};

/// Curated wellness products shown in the marketplace.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Premium Meditation Cushion".to_string(),
            description: "Ergonomic design for comfortable meditation sessions".to_string(),
            price: "$49.99".to_string(),
            category: ProductCategory::Meditation,
            image: "\u{1FA91}".to_string(), // 🪑
            rating: 4.8,
            reviews: 128,
        },
        Product {
            id: 2,
            name: "Organic Herbal Tea Collection".to_string(),
            description: "Handcrafted blend of calming herbs".to_string(),
            price: "$29.99".to_string(),
            category: ProductCategory::Wellness,
            image: "\u{1F375}".to_string(), // 🍵
            rating: 4.9,
            reviews: 95,
        },
        Product {
            id: 3,
            name: "Yoga Mat with Alignment Guide".to_string(),
            description: "Non-slip, eco-friendly mat with pose markers".to_string(),
            price: "$39.99".to_string(),
            category: ProductCategory::Yoga,
            image: "\u{1F9D8}\u{200D}\u{2642}\u{FE0F}".to_string(), // 🧘‍♂️
            rating: 4.7,
            reviews: 156,
        },
        Product {
            id: 4,
            name: "Spiritual Journal".to_string(),
            description: "Guided journal for self-reflection and growth".to_string(),
            price: "$24.99".to_string(),
            category: ProductCategory::Books,
            image: "\u{1F4D4}".to_string(), // 📔
            rating: 4.9,
            reviews: 87,
        },
        Product {
            id: 5,
            name: "Crystal Healing Set".to_string(),
            description: "Collection of energy-balancing crystals".to_string(),
            price: "$59.99".to_string(),
            category: ProductCategory::Wellness,
            image: "\u{1F48E}".to_string(), // 💎
            rating: 4.8,
            reviews: 112,
        },
        Product {
            id: 6,
            name: "Meditation Timer".to_string(),
            description: "Digital timer with gentle chime".to_string(),
            price: "$19.99".to_string(),
            category: ProductCategory::Meditation,
            image: "\u{23F1}\u{FE0F}".to_string(), // ⏱️
            rating: 4.6,
            reviews: 76,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids_unique() {
        let products = products();
        let mut ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_category_is_stocked() {
        let products = products();
        for category in [
            ProductCategory::Meditation,
            ProductCategory::Yoga,
            ProductCategory::Wellness,
            ProductCategory::Books,
        ] {
            assert!(
                products.iter().any(|p| p.category == category),
                "no products in {:?}",
                category
            );
        }
    }
}
