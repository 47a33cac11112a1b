//! Per-frame orchestration: candidate extraction, OCR, text cleaning,
//! grammar matching, region lookup, annotation.

use ab_glyph::FontVec;
use image::RgbImage;
use log::{debug, info};

use crate::detection::CandidateExtractor;
use crate::detection::ocr::{RecognizerOptions, TextRecognizer};
use crate::grammar::GrammarMatcher;
use crate::models::Detection;
use crate::overlay;
use crate::regions::RegionDirectory;

/// Strip every character that is not an uppercase Latin letter or digit.
/// Lowercase is dropped, not uppercased.
pub fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// One-frame-at-a-time plate recognition. Holds only read-only state
/// after construction; every `process` call is independent.
pub struct PlateRecognitionPipeline<R: TextRecognizer> {
    extractor: CandidateExtractor,
    matcher: GrammarMatcher,
    regions: RegionDirectory,
    recognizer: R,
    options: RecognizerOptions,
    /// Label font; without one, outlines are still drawn but text
    /// overlays are skipped.
    font: Option<FontVec>,
}

impl<R: TextRecognizer> PlateRecognitionPipeline<R> {
    pub fn new(extractor: CandidateExtractor, regions: RegionDirectory, recognizer: R) -> Self {
        Self {
            extractor,
            matcher: GrammarMatcher::new(),
            regions,
            recognizer,
            options: RecognizerOptions::default(),
            font: None,
        }
    }

    pub fn with_font(mut self, font: FontVec) -> Self {
        self.font = Some(font);
        self
    }

    /// Process one frame: annotate it in place and return the detections
    /// in candidate-discovery order. An empty result is normal -- most
    /// frames contain no valid plate.
    pub fn process(&self, frame: &mut RgbImage) -> Vec<Detection> {
        let mut detections = Vec::new();

        for candidate in self.extractor.extract(frame) {
            let raw = self.recognizer.recognize(&candidate.image, &self.options);
            let cleaned = clean_text(&raw);

            let Some(m) = self.matcher.find_match(&cleaned) else {
                // Most rectangular contours are not plates; skip quietly.
                debug!("candidate at ({}, {}) rejected: {:?}", candidate.rect.x, candidate.rect.y, cleaned);
                continue;
            };

            let region = self.regions.lookup(&m.prefix).to_string();
            info!("plate {} ({}, {})", m.formatted, region, m.category);

            if let Some(font) = &self.font {
                let label = format!("{} ({}, {})", m.formatted, region, m.category);
                overlay::draw_label(frame, &candidate.rect, &label, font);
            }

            detections.push(Detection {
                rect: candidate.rect,
                text: cleaned,
                formatted: m.formatted,
                category: m.category.to_string(),
                region,
            });
        }

        detections
    }
}
