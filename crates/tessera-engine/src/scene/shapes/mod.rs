pub(crate) mod circle;
pub(crate) mod common;
pub(crate) mod quads;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;

use crate::coords::{Point, Rect};
use crate::paint::Paint;
use crate::text::GlyphQuad;

/// Geometry of a shape command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeType {
    Circle { center: Point, radius: f32 },
    Rect(Rect),
    /// Uniform corner radius, clamped to half the shorter side.
    RoundRect { rect: Rect, radius: f32 },
    /// Ellipse inscribed in the rect.
    Oval(Rect),
}

/// Shape draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCommand {
    pub shape: ShapeType,
    pub paint: Paint,
}

impl ShapeCommand {
    #[inline]
    pub fn new(shape: ShapeType, paint: Paint) -> Self {
        Self { shape, paint }
    }

    /// Solid quads covering the shape, filled or stroked per `paint`.
    pub fn quads(&self) -> Vec<GlyphQuad> {
        match self.shape {
            ShapeType::Rect(rect) => rect::rect_quads(rect, &self.paint),
            ShapeType::RoundRect { rect, radius } => {
                rounded_rect::round_rect_quads(rect, radius, &self.paint)
            }
            ShapeType::Circle { center, radius } => {
                circle::ellipse_quads(center, radius, radius, &self.paint)
            }
            ShapeType::Oval(rect) => {
                let r = rect.normalized();
                circle::ellipse_quads(r.center(), r.width / 2.0, r.height / 2.0, &self.paint)
            }
        }
    }
}
