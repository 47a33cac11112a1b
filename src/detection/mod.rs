pub mod contours;
pub mod ocr;
pub mod preprocessing;

use image::RgbImage;
use log::debug;

use crate::models::{BoundingBox, Candidate};
use crate::overlay;

/// Finds rectangular plate candidates in a frame.
///
/// One pass per frame: grayscale, adaptive threshold, external contours,
/// 4-vertex polygon filter, bounding-rectangle crop. Accepted quads get
/// their outline drawn onto the frame immediately -- a cheap "rectangle
/// found" marker, drawn before any text is known to be valid.
pub struct CandidateExtractor {
    /// Adaptive threshold neighborhood diameter, in pixels.
    pub block_size: u32,
    /// Adaptive threshold offset constant.
    pub offset: f32,
    /// Polygon approximation tolerance as a fraction of contour perimeter.
    pub epsilon_frac: f64,
    /// Contours with a shorter perimeter are skipped. 0.0 disables the
    /// filter (every 4-vertex contour is a candidate).
    pub min_perimeter: f64,
}

impl CandidateExtractor {
    pub fn new() -> Self {
        Self {
            block_size: 11,
            offset: 2.0,
            epsilon_frac: 0.03,
            min_perimeter: 0.0,
        }
    }

    pub fn with_min_perimeter(mut self, min_perimeter: f64) -> Self {
        self.min_perimeter = min_perimeter;
        self
    }

    /// Extract candidates in contour-discovery order. A frame with no
    /// qualifying contours yields an empty vec; that is not an error.
    pub fn extract(&self, frame: &mut RgbImage) -> Vec<Candidate> {
        let gray = preprocessing::to_grayscale(frame);
        let binary = preprocessing::adaptive_threshold(&gray, self.block_size, self.offset);

        let found = contours::external_contours(&binary);
        debug!("frame {}x{}: {} external contours", frame.width(), frame.height(), found.len());

        let mut candidates = Vec::new();
        for contour in &found {
            if self.min_perimeter > 0.0 && contours::perimeter(contour) < self.min_perimeter {
                continue;
            }

            let poly = contours::approximate_polygon(contour, self.epsilon_frac);
            if poly.len() != 4 {
                continue;
            }

            let rect = BoundingBox::from_points(&poly);
            let image = crop(frame, &rect);
            overlay::draw_quad_outline(frame, &poly);

            candidates.push(Candidate { quad: poly, rect, image });
        }

        debug!("{} rectangular candidates", candidates.len());
        candidates
    }
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy of the frame region bounded by `rect`, clamped to the frame.
fn crop(frame: &RgbImage, rect: &BoundingBox) -> RgbImage {
    let x = rect.x.min(frame.width().saturating_sub(1));
    let y = rect.y.min(frame.height().saturating_sub(1));
    let width = rect.width.min(frame.width() - x).max(1);
    let height = rect.height.min(frame.height() - y).max(1);
    image::imageops::crop_imm(frame, x, y, width, height).to_image()
}
