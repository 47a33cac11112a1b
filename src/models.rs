use image::RgbImage;
use imageproc::point::Point;

/// Axis-aligned rectangle in frame coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Smallest axis-aligned box covering all of `points`.
    /// Coordinates are clamped at zero; callers pass in-frame points.
    pub fn from_points(points: &[Point<i32>]) -> Self {
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0).max(0) as u32;
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0) as u32;
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(0).max(0) as u32;
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0).max(0) as u32;
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }
}

/// A rectangular plate candidate: the approximated quad, its bounding
/// rectangle, and the pixel region it bounds. Lives for one frame pass.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub quad: Vec<Point<i32>>,
    pub rect: BoundingBox,
    pub image: RgbImage,
}

/// One recognized plate. Consumed immediately by the caller; the region
/// field carries the "Estado no encontrado" sentinel when the prefix is
/// not in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub rect: BoundingBox,
    /// Cleaned OCR text (uppercase alphanumeric only).
    pub text: String,
    /// Canonical rendering with separators, e.g. "ABC-123-D".
    pub formatted: String,
    /// Vehicle category label of the matched grammar.
    pub category: String,
    /// Issuing region, or the not-found sentinel.
    pub region: String,
}
