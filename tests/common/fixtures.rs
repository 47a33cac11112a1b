use image::{Rgb, RgbImage};
use platewatch::detection::ocr::{RecognizerOptions, TextRecognizer};
use platewatch::regions::RegionEntry;
use std::io::Write;
use tempfile::NamedTempFile;

/// Uniform mid-gray frame with no structure at all.
pub fn blank_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([128u8, 128u8, 128u8]))
}

/// Dark frame with one bright axis-aligned rectangle, the shape a plate
/// presents to the extractor. Returns the frame and the rectangle bounds
/// as (x, y, width, height).
pub fn frame_with_rectangle(width: u32, height: u32) -> (RgbImage, (u32, u32, u32, u32)) {
    let mut frame = RgbImage::from_pixel(width, height, Rgb([20u8, 20u8, 20u8]));
    let (rx, ry, rw, rh) = (width / 4, height / 3, width / 2, height / 4);
    for y in ry..ry + rh {
        for x in rx..rx + rw {
            frame.put_pixel(x, y, Rgb([230u8, 230u8, 230u8]));
        }
    }
    (frame, (rx, ry, rw, rh))
}

/// Recognizer stub returning the same raw text for every region.
pub struct FixedTextRecognizer {
    pub text: String,
}

impl FixedTextRecognizer {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl TextRecognizer for FixedTextRecognizer {
    fn recognize(&self, _region: &RgbImage, _options: &RecognizerOptions) -> String {
        self.text.clone()
    }
}

pub fn test_entries() -> Vec<RegionEntry> {
    serde_json::from_str(
        r#"[
            { "prefijo": "CD", "estado": "Ciudad de México" },
            { "prefijo": "AB", "estado": "Jalisco" },
            { "prefijo": "NL", "estado": "Nuevo León" }
        ]"#,
    )
    .expect("Failed to parse test entries")
}

/// Writes `contents` to a temp file and returns it (kept alive by the
/// caller for the duration of the test).
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp dataset file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp dataset file");
    file
}
