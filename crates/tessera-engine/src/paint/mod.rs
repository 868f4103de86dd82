//! Paint configuration for shapes and text.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - shape paint (fill/stroke)
//! - text paint (size, glyph gap, gravity)
//!
//! Geometry types remain in `coords`.

mod color;
mod paint;
mod text_paint;

pub use color::Color;
pub use paint::{FillStyle, Paint};
pub use text_paint::{FONT_DEFAULT_SIZE, TextGravity, TextPaint, TextStyle};
