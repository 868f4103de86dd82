use crate::coords::{Point, Rect};
use crate::paint::TextPaint;
use crate::text::{GlyphAtlas, GlyphQuad, layout_at_point, layout_in_rect, rotate_quads};

/// Where a text command is anchored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextAnchor {
    /// Left edge and baseline of the first line.
    Point { left: f32, bottom: f32 },
    /// Bounding rect; lines wrap to its width and align by gravity.
    Rect(Rect),
}

/// Text draw payload.
///
/// Glyph layout happens when parameters are put, against the atlas current at
/// that time; execution only replays the quads.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRenderCommand {
    text: String,
    anchor: TextAnchor,
    paint: TextPaint,
    rotation: Option<(Point, f32)>,
    quads: Vec<GlyphQuad>,
}

impl TextRenderCommand {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            anchor: TextAnchor::Point { left: 0.0, bottom: 0.0 },
            paint: TextPaint::default(),
            rotation: None,
            quads: Vec::new(),
        }
    }

    /// Lays `text` out from `(left, bottom)`.
    pub fn put_params(
        &mut self,
        atlas: &GlyphAtlas,
        text: impl Into<String>,
        left: f32,
        bottom: f32,
        paint: &TextPaint,
    ) {
        self.text = text.into();
        self.anchor = TextAnchor::Point { left, bottom };
        self.paint = *paint;
        self.rotation = None;
        self.quads = layout_at_point(atlas, &self.text, left, bottom, paint);
    }

    /// Lays `text` out inside `rect`.
    pub fn put_params_in_rect(
        &mut self,
        atlas: &GlyphAtlas,
        text: impl Into<String>,
        rect: &Rect,
        paint: &TextPaint,
    ) {
        self.text = text.into();
        self.anchor = TextAnchor::Rect(*rect);
        self.paint = *paint;
        self.rotation = None;
        self.quads = layout_in_rect(atlas, &self.text, rect, paint);
    }

    /// Rotates the laid-out quads about `pivot` by `angle` radians.
    pub fn rotate(&mut self, pivot: Point, angle: f32) {
        rotate_quads(&mut self.quads, pivot, angle);
        self.rotation = Some(match self.rotation {
            Some((p, a)) if p == pivot => (p, a + angle),
            _ => (pivot, angle),
        });
    }

    #[must_use]
    pub fn with_rotation(mut self, pivot: Point, angle: f32) -> Self {
        self.rotate(pivot, angle);
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    #[inline]
    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    /// Most recent rotation pivot and accumulated angle about it.
    #[inline]
    pub fn rotation(&self) -> Option<(Point, f32)> {
        self.rotation
    }

    #[inline]
    pub fn quads(&self) -> &[GlyphQuad] {
        &self.quads
    }
}

impl Default for TextRenderCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mono_atlas;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn put_params_lays_out_at_point() {
        let (atlas, _) = mono_atlas("hi", 10, 20);
        let mut cmd = TextRenderCommand::new();
        cmd.put_params(&atlas, "hi", 5.0, 7.0, &TextPaint::default());

        assert_eq!(cmd.text(), "hi");
        assert_eq!(cmd.anchor(), TextAnchor::Point { left: 5.0, bottom: 7.0 });
        assert_eq!(cmd.quads().len(), 2);
        assert_eq!(cmd.quads()[0].x, 5.0);
    }

    #[test]
    fn put_params_in_rect_records_anchor() {
        let (atlas, _) = mono_atlas("hi", 10, 20);
        let rect = Rect::new(0.0, 40.0, 100.0, 40.0);
        let mut cmd = TextRenderCommand::new();
        cmd.put_params_in_rect(&atlas, "hi", &rect, &TextPaint::default());
        assert_eq!(cmd.anchor(), TextAnchor::Rect(rect));
        assert_eq!(cmd.quads().len(), 2);
    }

    #[test]
    fn rotation_turns_whole_string() {
        let (atlas, _) = mono_atlas("ab", 10, 20);
        let mut cmd = TextRenderCommand::new();
        cmd.put_params(&atlas, "ab", 0.0, 0.0, &TextPaint::default().with_gap(0.0));
        cmd.rotate(Point::zero(), FRAC_PI_2);

        // Second glyph's bottom-left (10, 0) ends up at (0, 10).
        let bl = cmd.quads()[1].corners()[0];
        assert_relative_eq!(bl.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(bl.y, 10.0, epsilon = 1e-5);
        assert_eq!(cmd.rotation(), Some((Point::zero(), FRAC_PI_2)));
    }

    #[test]
    fn empty_text_lays_out_nothing() {
        let (atlas, _) = mono_atlas("ab", 10, 20);
        let mut cmd = TextRenderCommand::new();
        cmd.put_params(&atlas, "", 0.0, 0.0, &TextPaint::default());
        assert!(cmd.quads().is_empty());
        assert_eq!(cmd.anchor(), TextAnchor::Point { left: 0.0, bottom: 0.0 });
    }
}
