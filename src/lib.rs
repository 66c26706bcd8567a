//! pxgen - procedural sprite and tile asset generator
//!
//! Composes the game's 8-bit character sprites and background tiles from
//! fixed shape-drawing sequences and per-pixel coordinate rules, then
//! writes each one as a PNG.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use catalog::{Asset, AssetKind};
pub use error::{PxgenError, Result};
pub use render::{write_png, Canvas};
pub use types::{Colour, Palette};
