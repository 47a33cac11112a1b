mod common;

use common::fixtures::{blank_frame, frame_with_rectangle};
use platewatch::CandidateExtractor;

#[test]
fn blank_frame_yields_no_candidates() {
    let mut frame = blank_frame(160, 120);
    let candidates = CandidateExtractor::new().extract(&mut frame);
    assert!(candidates.is_empty());
}

#[test]
fn single_rectangle_yields_one_candidate() {
    let (mut frame, (rx, ry, rw, rh)) = frame_with_rectangle(200, 120);
    let candidates = CandidateExtractor::new().extract(&mut frame);
    assert_eq!(candidates.len(), 1);

    // The thresholded edge band sits just outside the bright shape, so
    // the bounding box covers the rectangle with a small margin.
    let tolerance = 10;
    let rect = &candidates[0].rect;
    assert!(rect.x <= rx && rx - rect.x <= tolerance);
    assert!(rect.y <= ry && ry - rect.y <= tolerance);
    assert!(rect.x + rect.width >= rx + rw);
    assert!(rect.x + rect.width - (rx + rw) <= tolerance);
    assert!(rect.y + rect.height >= ry + rh);
    assert!(rect.y + rect.height - (ry + rh) <= tolerance);

    assert_eq!(candidates[0].quad.len(), 4);
    assert_eq!(candidates[0].image.dimensions(), (rect.width, rect.height));
}

#[test]
fn min_perimeter_filters_small_contours() {
    let (mut frame, _) = frame_with_rectangle(200, 120);
    let extractor = CandidateExtractor::new().with_min_perimeter(10_000.0);
    assert!(extractor.extract(&mut frame).is_empty());
}

#[test]
fn accepted_candidate_outline_is_drawn_on_the_frame() {
    let (mut frame, _) = frame_with_rectangle(200, 120);
    let before_green = frame.pixels().filter(|p| p.0 == [0, 255, 0]).count();
    let candidates = CandidateExtractor::new().extract(&mut frame);
    assert_eq!(candidates.len(), 1);
    let after_green = frame.pixels().filter(|p| p.0 == [0, 255, 0]).count();
    assert!(after_green > before_green);
}
