//! Optional signed-in identity, kept apart from discussion state

mod context;

pub use context::*;
