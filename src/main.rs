use clap::Parser;
use env_logger::Env;
use image::ImageReader;
use std::path::PathBuf;

use platewatch::detection::ocr::{OcrConfig, OcrsRecognizer};
use platewatch::{CandidateExtractor, PlateRecognitionPipeline, RegionDirectory, overlay};

#[derive(Parser)]
#[command(name = "platewatch")]
#[command(about = "Detect and read license plates from images")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Path to the prefix-to-region JSON dataset
    #[arg(long, value_name = "JSON", default_value = "data/placas_estados_mexico.json")]
    regions: PathBuf,

    /// OCR text-detection model (defaults to ~/.cache/ocrs)
    #[arg(long, value_name = "RTEN")]
    detection_model: Option<PathBuf>,

    /// OCR text-recognition model (defaults to ~/.cache/ocrs)
    #[arg(long, value_name = "RTEN")]
    recognition_model: Option<PathBuf>,

    /// TTF/OTF font for text overlays (outlines are drawn regardless)
    #[arg(long, value_name = "FONT")]
    font: Option<PathBuf>,

    /// Write the annotated frame to this path
    #[arg(short, long, value_name = "PNG")]
    output: Option<PathBuf>,

    /// Skip contours shorter than this perimeter, in pixels
    #[arg(long, default_value_t = 0.0)]
    min_perimeter: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    // Dataset or model problems are fatal at startup, before any frame.
    let regions = RegionDirectory::load(&args.regions)?;

    let ocr_config = match (args.detection_model, args.recognition_model) {
        (Some(detection_model), Some(recognition_model)) => OcrConfig {
            detection_model,
            recognition_model,
        },
        _ => OcrConfig::from_cache_dir()?,
    };
    let recognizer = OcrsRecognizer::new(&ocr_config)?;

    let extractor = CandidateExtractor::new().with_min_perimeter(args.min_perimeter);
    let mut pipeline = PlateRecognitionPipeline::new(extractor, regions, recognizer);
    if let Some(font_path) = &args.font {
        pipeline = pipeline.with_font(overlay::load_font(font_path)?);
    }

    let mut frame = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?
        .to_rgb8();

    let detections = pipeline.process(&mut frame);

    println!("Total detections: {}", detections.len());
    for d in &detections {
        println!(
            "  {} at ({}, {}) - region: {}, type: {}",
            d.formatted, d.rect.x, d.rect.y, d.region, d.category
        );
    }

    if let Some(output) = &args.output {
        frame.save(output)?;
        println!("Annotated frame written to {}", output.display());
    }

    Ok(())
}
