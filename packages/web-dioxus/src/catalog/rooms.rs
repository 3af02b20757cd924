//! Discussion room catalog

use crate::types::Room;

/// Every discussion room on the site. Ids are stable; the board relies on
/// them to file thoughts under a room.
pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            title: "Mindfulness & Meditation".to_string(),
            description: "Share experiences and tips about meditation practices".to_string(),
            icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}".to_string(), // 🧘‍♀️
            participants: 45,
            last_active: "2 minutes ago".to_string(),
        },
        Room {
            id: 2,
            title: "Spiritual Growth".to_string(),
            description: "Discuss spiritual journeys and personal growth".to_string(),
            icon: "\u{2728}".to_string(), // ✨
            participants: 32,
            last_active: "5 minutes ago".to_string(),
        },
        Room {
            id: 3,
            title: "Stress Management".to_string(),
            description: "Share coping strategies and support each other".to_string(),
            icon: "\u{1F33F}".to_string(), // 🌿
            participants: 28,
            last_active: "10 minutes ago".to_string(),
        },
        Room {
            id: 4,
            title: "Wellness & Self-Care".to_string(),
            description: "Exchange ideas about holistic wellness practices".to_string(),
            icon: "\u{1F486}\u{200D}\u{2640}\u{FE0F}".to_string(), // 💆‍♀️
            participants: 36,
            last_active: "15 minutes ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_ids_unique() {
        let rooms = rooms();
        let mut ids: Vec<u32> = rooms.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rooms.len());
    }

    #[test]
    fn test_rooms_have_content() {
        for room in rooms() {
            assert!(!room.title.is_empty());
            assert!(!room.description.is_empty());
            assert!(!room.icon.is_empty());
        }
    }
}
