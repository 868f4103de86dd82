//! Coordinate and geometry types shared by layout, commands and backends.
//!
//! Canonical CPU space:
//! - pixels, origin bottom-left
//! - +X right, +Y up (a rect's `top` is numerically above its `bottom`)
//!
//! [`NormalMatrix`] maps this space to NDC; it is rebuilt on every resize.

mod matrix;
mod point;
mod rect;
mod viewport;

pub use matrix::NormalMatrix;
pub use point::Point;
pub use rect::Rect;
pub use viewport::Viewport;
