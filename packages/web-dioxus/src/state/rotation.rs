//! Carousel rotation state

/// Cursor over a fixed-length testimonial list.
///
/// Advancing wraps around; selecting an out-of-range index is ignored so
/// the cursor always stays valid for the list it was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialRotation {
    current: usize,
    len: usize,
}

impl TestimonialRotation {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Steps to the next entry, wrapping at the end.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Jumps straight to `index`, for the dot controls under the card.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        let mut rotation = TestimonialRotation::new(3);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), 2);
        rotation.advance();
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut rotation = TestimonialRotation::new(4);
        rotation.select(2);
        assert_eq!(rotation.current(), 2);
        rotation.select(9);
        assert_eq!(rotation.current(), 2);
    }

    #[test]
    fn test_empty_rotation_stays_put() {
        let mut rotation = TestimonialRotation::new(0);
        rotation.advance();
        assert_eq!(rotation.current(), 0);
    }
}
