//! Glyph layout.
//!
//! Both entry points share one policy for characters missing from the atlas:
//! the glyph is skipped, the cursor advances by the space width (scaled, plus
//! the usual gap) and the miss is logged once per character per call.
//!
//! Spaces never produce quads; they only advance the cursor.

use std::rc::Rc;
use std::sync::Once;

use crate::coords::Rect;
use crate::paint::{TextGravity, TextPaint, TextStyle};

use super::{GlyphAtlas, GlyphInfo, GlyphQuad};

/// A character resolved against the atlas, with scaled metrics.
struct Placed {
    ch: char,
    glyph: Option<Rc<GlyphInfo>>,
    advance: f32,
    height: f32,
}

impl Placed {
    fn is_space(&self) -> bool {
        self.ch == ' '
    }
}

/// Lays out `text` left to right from `(left, bottom)`.
///
/// `bottom` is the baseline; quads grow upward. Each glyph advances the cursor
/// by `width * scale + gap`. A `'\n'` moves to a new line one line height plus
/// gap below.
pub fn layout_at_point(
    atlas: &GlyphAtlas,
    text: &str,
    left: f32,
    bottom: f32,
    paint: &TextPaint,
) -> Vec<GlyphQuad> {
    if text.is_empty() {
        return Vec::new();
    }
    check_style(paint);

    let scale = paint.text_size_scale;
    let line_advance = atlas.line_height() as f32 * scale + paint.gap_size;

    let mut misses = Vec::new();
    let mut quads = Vec::with_capacity(text.len());

    for (row, line) in text.split('\n').enumerate() {
        let placed = shape_line(atlas, line, scale, &mut misses);
        let baseline = bottom - row as f32 * line_advance;
        emit_line(&placed, left, baseline, paint.gap_size, &mut quads);
    }

    report_misses(&misses);
    quads
}

/// Lays out `text` inside `rect`.
///
/// Lines break at `'\n'` and wrap greedily at spaces when wider than the
/// rect (a word wider than the rect is split between characters). Each line is
/// aligned by `paint.gravity`; the block of lines is centered vertically on
/// the rect's center. Empty text produces no quads.
pub fn layout_in_rect(
    atlas: &GlyphAtlas,
    text: &str,
    rect: &Rect,
    paint: &TextPaint,
) -> Vec<GlyphQuad> {
    if text.is_empty() {
        return Vec::new();
    }
    check_style(paint);

    let rect = rect.normalized();
    let scale = paint.text_size_scale;
    let gap = paint.gap_size;

    let mut misses = Vec::new();
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let placed = shape_line(atlas, paragraph, scale, &mut misses);
        lines.extend(wrap_line(placed, rect.width, gap));
    }
    report_misses(&misses);

    let fallback_height = atlas.line_height() as f32 * scale;
    let heights: Vec<f32> = lines
        .iter()
        .map(|line| line_box_height(line, fallback_height))
        .collect();
    let block_height = heights.iter().sum::<f32>() + gap * lines.len().saturating_sub(1) as f32;

    let center = rect.center();
    let mut top = center.y + block_height / 2.0;
    let mut quads = Vec::with_capacity(text.len());

    for (line, height) in lines.iter().zip(heights) {
        let baseline = top - height;
        let width = line_width(line, gap);
        let start = match paint.gravity {
            TextGravity::Left => rect.left,
            TextGravity::Center => center.x - width / 2.0,
            TextGravity::Right => rect.right() - width,
        };
        emit_line(line, start, baseline, gap, &mut quads);
        top = baseline - gap;
    }

    quads
}

/// Width of the widest `'\n'`-separated line, without wrapping.
pub fn measure_text(atlas: &GlyphAtlas, text: &str, paint: &TextPaint) -> f32 {
    let mut misses = Vec::new();
    text.split('\n')
        .map(|line| {
            let placed = shape_line(atlas, line, paint.text_size_scale, &mut misses);
            line_width(&placed, paint.gap_size)
        })
        .fold(0.0, f32::max)
}

fn shape_line(atlas: &GlyphAtlas, line: &str, scale: f32, misses: &mut Vec<char>) -> Vec<Placed> {
    let miss_advance = atlas.space_width() as f32 * scale;

    line.chars()
        .map(|ch| match atlas.lookup(ch) {
            Some(glyph) => Placed {
                ch,
                advance: glyph.width as f32 * scale,
                height: glyph.height as f32 * scale,
                glyph: Some(glyph),
            },
            None => {
                if !misses.contains(&ch) {
                    misses.push(ch);
                }
                Placed { ch, glyph: None, advance: miss_advance, height: 0.0 }
            }
        })
        .collect()
}

fn emit_line(line: &[Placed], left: f32, baseline: f32, gap: f32, out: &mut Vec<GlyphQuad>) {
    let mut cursor = left;
    for p in line {
        if let Some(glyph) = p.glyph.as_deref().filter(|g| !g.is_blank()) {
            out.push(GlyphQuad::new(
                cursor,
                baseline,
                p.advance,
                p.height,
                glyph.tex_coords,
                glyph.texture.clone(),
            ));
        }
        cursor += p.advance + gap;
    }
}

/// Sum of advances plus the gaps between glyphs (no trailing gap).
fn line_width(line: &[Placed], gap: f32) -> f32 {
    let advances: f32 = line.iter().map(|p| p.advance).sum();
    advances + gap * line.len().saturating_sub(1) as f32
}

fn line_box_height(line: &[Placed], fallback: f32) -> f32 {
    let tallest = line.iter().map(|p| p.height).fold(0.0, f32::max);
    if tallest > 0.0 { tallest } else { fallback }
}

fn wrap_line(placed: Vec<Placed>, max_width: f32, gap: f32) -> Vec<Vec<Placed>> {
    if !(max_width > 0.0 && max_width.is_finite()) {
        return vec![placed];
    }

    let mut lines = Vec::new();
    let mut line: Vec<Placed> = Vec::new();
    let mut width = 0.0;
    // Set at a break; spaces carried past it are dropped.
    let mut after_break = false;

    for p in placed {
        if after_break && line.is_empty() && p.is_space() {
            continue;
        }
        after_break = false;

        let extended = if line.is_empty() { p.advance } else { width + gap + p.advance };
        if line.is_empty() || extended <= max_width {
            width = extended;
            line.push(p);
            continue;
        }

        after_break = true;
        if p.is_space() {
            push_trimmed(&mut lines, std::mem::take(&mut line));
            width = 0.0;
            continue;
        }

        match line.iter().rposition(Placed::is_space) {
            Some(at) => {
                let rest = line.split_off(at + 1);
                let done = std::mem::replace(&mut line, rest);
                push_trimmed(&mut lines, done);
            }
            None => lines.push(std::mem::take(&mut line)),
        }
        line.push(p);
        width = line_width(&line, gap);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pushes `line` without its trailing spaces; a line of only spaces is dropped.
fn push_trimmed(lines: &mut Vec<Vec<Placed>>, mut line: Vec<Placed>) {
    while line.last().is_some_and(Placed::is_space) {
        line.pop();
    }
    if !line.is_empty() {
        lines.push(line);
    }
}

fn report_misses(misses: &[char]) {
    for ch in misses {
        log::warn!("no glyph for {ch:?}; advancing by the space width");
    }
}

fn check_style(paint: &TextPaint) {
    static ITALIC_NOTICE: Once = Once::new();
    if paint.style == TextStyle::Italic {
        ITALIC_NOTICE.call_once(|| log::debug!("italic text is not supported; rendering upright"));
    }
}
