//! In-place frame annotation: candidate outlines during extraction and
//! plate labels after a successful match.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};
use imageproc::point::Point;

use crate::models::BoundingBox;

const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const LABEL_SCALE: f32 = 16.0;
const LABEL_OFFSET: i32 = 18;

/// Draw the closed outline of an accepted quad onto the frame.
pub fn draw_quad_outline(frame: &mut RgbImage, quad: &[Point<i32>]) {
    for (i, p) in quad.iter().enumerate() {
        let q = &quad[(i + 1) % quad.len()];
        draw_line_segment_mut(
            frame,
            (p.x as f32, p.y as f32),
            (q.x as f32, q.y as f32),
            GREEN,
        );
    }
}

/// Draw `text` just above `rect`, clamped so the label stays in frame.
pub fn draw_label(frame: &mut RgbImage, rect: &BoundingBox, text: &str, font: &FontVec) {
    let x = rect.x as i32;
    let y = (rect.y as i32 - LABEL_OFFSET).max(0);
    draw_text_mut(frame, GREEN, x, y, PxScale::from(LABEL_SCALE), font, text);
}

/// Load a TTF/OTF font for label drawing.
pub fn load_font(path: &std::path::Path) -> anyhow::Result<FontVec> {
    let bytes = std::fs::read(path)?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| anyhow::anyhow!("failed to parse font {}: {}", path.display(), e))
}
