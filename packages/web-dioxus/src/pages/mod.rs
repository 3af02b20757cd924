//! Page components

mod discussion_rooms;
mod home;
mod marketplace;

pub use discussion_rooms::*;
pub use home::*;
pub use marketplace::*;
