pub mod detection;
pub mod grammar;
pub mod models;
pub mod overlay;
pub mod pipeline;
pub mod regions;

pub use detection::CandidateExtractor;
pub use detection::ocr::{
    Charset, Layout, OcrConfig, OcrsRecognizer, RecognizerOptions, TextRecognizer,
};
pub use grammar::{GrammarMatcher, PlateGrammar, PlateMatch};
pub use models::{BoundingBox, Candidate, Detection};
pub use pipeline::{PlateRecognitionPipeline, clean_text};
pub use regions::{DataLoadError, REGION_NOT_FOUND, RegionDirectory, RegionEntry};
