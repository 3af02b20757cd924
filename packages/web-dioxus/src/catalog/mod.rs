//! Static site content
//!
//! Rooms, products, and testimonials are hard-coded catalogs. Pages fetch
//! rooms and products through server functions so a real content service
//! can slot in behind the same seam later.

mod products;
mod rooms;
mod testimonials;

pub use products::*;
pub use rooms::*;
pub use testimonials::*;
