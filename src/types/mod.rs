//! Core value types: colours and the game palette.

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::Palette;
