use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

/// Outer-border contours of the binary image, in discovery order.
/// Hole borders (innermost contours) are dropped.
pub fn external_contours(binary: &GrayImage) -> Vec<Vec<Point<i32>>> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| c.points)
        .collect()
}

/// Closed-curve perimeter of a contour.
pub fn perimeter(contour: &[Point<i32>]) -> f64 {
    arc_length(contour, true)
}

/// Douglas-Peucker approximation with tolerance `epsilon_frac` of the
/// contour's perimeter (0.03 for plate candidates).
pub fn approximate_polygon(contour: &[Point<i32>], epsilon_frac: f64) -> Vec<Point<i32>> {
    let epsilon = epsilon_frac * perimeter(contour);
    approximate_polygon_dp(contour, epsilon, true)
}
