//! Domain types for the Nirvaha front end
//!
//! Rooms, products, and testimonials are static catalog content served
//! over the fullstack seam; thoughts and replies live only in session
//! memory and never serialize.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Discussion Room Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub participants: u32,
    pub last_active: String,
}

/// The closed set of reactions a thought can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReactionKind {
    Heart,
    Gratitude,
    Sparkle,
    Calm,
}

impl ReactionKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "\u{2764}\u{FE0F}", // ❤️
            ReactionKind::Gratitude => "\u{1F64F}",    // 🙏
            ReactionKind::Sparkle => "\u{2728}",       // ✨
            ReactionKind::Calm => "\u{1F33F}",         // 🌿
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "Love",
            ReactionKind::Gratitude => "Gratitude",
            ReactionKind::Sparkle => "Uplifting",
            ReactionKind::Calm => "Calming",
        }
    }

    pub fn variants() -> &'static [ReactionKind] {
        &[
            ReactionKind::Heart,
            ReactionKind::Gratitude,
            ReactionKind::Sparkle,
            ReactionKind::Calm,
        ]
    }
}

/// An anonymous message posted into a discussion room.
///
/// Thoughts carry no author reference at all; anonymity is a property of
/// the data model, not a display choice.
#[derive(Debug, Clone, PartialEq)]
pub struct Thought {
    pub id: u64,
    pub content: String,
    pub room_id: u32,
    pub created_at: DateTime<Utc>,
    /// Legacy counter kept for engagement scoring; nothing increments it.
    pub like_count: u32,
    pub reactions: BTreeMap<ReactionKind, u32>,
    pub replies: Vec<Reply>,
}

impl Thought {
    /// Total engagement: the like counter plus every reaction received.
    pub fn engagement(&self) -> u32 {
        self.like_count + self.reactions.values().sum::<u32>()
    }
}

/// A message attached to exactly one thought, ordered by submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Marketplace Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Meditation,
    Yoga,
    Wellness,
    Books,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: ProductCategory,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

// ============================================================================
// Testimonial Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: String,
    pub frequency: u32,
    pub rating: u32,
}

// ============================================================================
// Identity Types
// ============================================================================

/// Signed-in member, when one exists. Shown only as a profile affordance
/// in the navigation; never attached to discussion content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub member_id: Uuid,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_palette_covers_core_reactions() {
        let emojis: Vec<&str> = ReactionKind::variants().iter().map(|k| k.emoji()).collect();
        assert!(emojis.contains(&"\u{2764}\u{FE0F}"));
        assert!(emojis.contains(&"\u{1F64F}"));
    }

    #[test]
    fn test_engagement_sums_likes_and_reactions() {
        let mut reactions = BTreeMap::new();
        reactions.insert(ReactionKind::Heart, 2);
        reactions.insert(ReactionKind::Calm, 1);
        let thought = Thought {
            id: 1,
            content: "breathing exercises helped".to_string(),
            room_id: 1,
            created_at: Utc::now(),
            like_count: 3,
            reactions,
            replies: Vec::new(),
        };
        assert_eq!(thought.engagement(), 6);
    }
}
