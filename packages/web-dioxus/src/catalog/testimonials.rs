//! Testimonial catalog

use std::cmp::Reverse;

use crate::types::Testimonial;

/// Testimonials for the landing page carousel, most-reviewed voices first.
pub fn testimonials() -> Vec<Testimonial> {
    let mut entries = vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: "Meditation Enthusiast".to_string(),
            content: "Nirvaha has transformed my daily meditation practice. The guided sessions \
                      are incredibly calming and the sound healing features are magical."
                .to_string(),
            avatar: "\u{1F469}\u{200D}\u{1F9B0}".to_string(), // 👩‍🦰
            frequency: 128,
            rating: 5,
        },
        Testimonial {
            id: 2,
            name: "Michael Chen".to_string(),
            role: "Yoga Instructor".to_string(),
            content: "As a yoga teacher, I appreciate the depth of spiritual wisdom available \
                      through the divine chat. It's like having a personal guru available 24/7."
                .to_string(),
            avatar: "\u{1F9D8}\u{200D}\u{2642}\u{FE0F}".to_string(), // 🧘‍♂️
            frequency: 95,
            rating: 5,
        },
        Testimonial {
            id: 3,
            name: "Emma Rodriguez".to_string(),
            role: "Wellness Coach".to_string(),
            content: "The combination of ancient wisdom and modern technology is brilliant. The \
                      sound healing frequencies have helped me achieve deeper states of meditation."
                .to_string(),
            avatar: "\u{1F469}\u{200D}\u{2695}\u{FE0F}".to_string(), // 👩‍⚕️
            frequency: 76,
            rating: 5,
        },
        Testimonial {
            id: 4,
            name: "David Wilson".to_string(),
            role: "Tech Entrepreneur".to_string(),
            content: "Nirvaha has become an essential part of my daily routine. The AI spiritual \
                      guide provides surprisingly profound insights that have helped me grow."
                .to_string(),
            avatar: "\u{1F468}\u{200D}\u{1F4BC}".to_string(), // 👨‍💼
            frequency: 64,
            rating: 5,
        },
    ];
    entries.sort_by_key(|t| Reverse(t.frequency));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonials_sorted_by_frequency() {
        let entries = testimonials();
        assert!(!entries.is_empty());
        for pair in entries.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
        }
    }
}
