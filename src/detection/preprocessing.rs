use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Convert a color frame to single-channel intensity.
pub fn to_grayscale(frame: &RgbImage) -> GrayImage {
    image::imageops::grayscale(frame)
}

/// Gaussian-weighted adaptive threshold.
///
/// A pixel becomes foreground (255) when it is darker than its local
/// Gaussian-weighted mean by more than `offset`. This highlights edge
/// bands and text strokes; uniform regions produce no foreground at all,
/// so a blank frame thresholds to an empty binary image.
///
/// `block_size` is the neighborhood diameter in pixels (11 for plate
/// detection); the blur sigma is derived from it the same way OpenCV
/// derives a kernel's default sigma.
pub fn adaptive_threshold(gray: &GrayImage, block_size: u32, offset: f32) -> GrayImage {
    let sigma = 0.3 * ((block_size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let local_mean = gaussian_blur_f32(gray, sigma);

    let mut binary = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let mean = local_mean.get_pixel(x, y)[0] as f32;
        let value = if (pixel[0] as f32) < mean - offset { 255 } else { 0 };
        binary.put_pixel(x, y, Luma([value]));
    }
    binary
}
