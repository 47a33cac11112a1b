//! OCR boundary. The engine is a black box behind [`TextRecognizer`]:
//! pixels in, raw text out. Empty or garbage output is a normal outcome
//! that downstream cleaning and grammar matching absorb; the trait never
//! fails per-candidate.

use std::path::{Path, PathBuf};

use image::RgbImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;

/// Character repertoire the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Uppercase Latin letters and digits.
    UpperAlphanumeric,
}

/// Text layout hint for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Sparse text, single line (a plate's one row of characters).
    SparseLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizerOptions {
    pub charset: Charset,
    pub layout: Layout,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            charset: Charset::UpperAlphanumeric,
            layout: Layout::SparseLine,
        }
    }
}

/// Black-box text recognizer for a candidate region.
pub trait TextRecognizer {
    /// Raw engine output for `region`. Returns an empty string when the
    /// engine sees nothing or fails; never an error.
    fn recognize(&self, region: &RgbImage, options: &RecognizerOptions) -> String;
}

/// Model locations for [`OcrsRecognizer`]. Passed in explicitly; there is
/// no process-global engine configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
}

impl OcrConfig {
    /// Models in the standard ocrs cache directory under `$HOME`.
    pub fn from_cache_dir() -> anyhow::Result<Self> {
        let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        let cache_dir = Path::new(&home_dir).join(".cache/ocrs");
        Ok(Self {
            detection_model: cache_dir.join("text-detection.rten"),
            recognition_model: cache_dir.join("text-recognition.rten"),
        })
    }
}

/// `ocrs`-backed recognizer. Engine construction happens once, up front;
/// a missing model is a startup failure like a missing dataset.
pub struct OcrsRecognizer {
    engine: OcrEngine,
}

impl OcrsRecognizer {
    pub fn new(config: &OcrConfig) -> anyhow::Result<Self> {
        if !config.detection_model.exists() || !config.recognition_model.exists() {
            anyhow::bail!(
                "OCR models not found. Please run: ocrs-cli --help (or download models manually)\n\
                 Expected locations:\n  - {}\n  - {}",
                config.detection_model.display(),
                config.recognition_model.display()
            );
        }

        let detection_model = Model::load_file(&config.detection_model)?;
        let recognition_model = Model::load_file(&config.recognition_model)?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })?;

        Ok(Self { engine })
    }
}

impl TextRecognizer for OcrsRecognizer {
    fn recognize(&self, region: &RgbImage, _options: &RecognizerOptions) -> String {
        // ocrs has no charset/layout knobs; the pipeline's cleaning step
        // enforces the uppercase-alphanumeric repertoire on the way out.
        let Ok(source) = ImageSource::from_bytes(region.as_raw(), region.dimensions()) else {
            return String::new();
        };
        let Ok(input) = self.engine.prepare_input(source) else {
            return String::new();
        };
        match self.engine.get_text(&input) {
            Ok(text) => text.trim().to_string(),
            Err(_) => String::new(),
        }
    }
}
