//! Reusable UI components

mod navbar;
mod product_card;
mod room_card;
mod site_layout;
mod testimonials;
mod thought_card;
mod thought_composer;

pub use navbar::*;
pub use product_card::*;
pub use room_card::*;
pub use site_layout::*;
pub use testimonials::*;
pub use thought_card::*;
pub use thought_composer::*;
