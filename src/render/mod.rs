//! Rendering module: the canvas, the composition procedures, and PNG
//! output.

mod canvas;
mod png;
pub mod sprites;
pub mod tiles;

pub use canvas::Canvas;
pub use png::write_png;
