use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY, PROGRESS_SPINNER_TEMPLATE};
use crate::encode::encode_image;
use crate::error::Result;
use crate::loader::load_image;
use crate::report::{format_file_size, report, CompressionResult};
use crate::resize::shrink_to_fit;
use crate::resolve::resolve_output_path;
use crate::{info, verbose};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// One invocation's worth of work. Immutable once constructed; the
/// output path is resolved and quality clamped up front so the pipeline
/// stages can trust both.
#[derive(Debug, Clone)]
pub struct CompressionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub quality: u8,
    pub max_width: u32,
    pub max_height: u32,
}

impl CompressionJob {
    pub fn new(
        input_path: PathBuf,
        output: Option<PathBuf>,
        quality: Option<i32>,
        max_width: u32,
        max_height: u32,
    ) -> Result<Self> {
        let output_path = resolve_output_path(&input_path, output)?;
        let quality = clamp_quality(quality);

        Ok(Self {
            input_path,
            output_path,
            quality,
            max_width,
            max_height,
        })
    }
}

/// Out-of-range quality values are clamped rather than rejected, so
/// `-q -5` behaves as 0 and `-q 150` as 100.
pub fn clamp_quality(quality: Option<i32>) -> u8 {
    match quality {
        Some(q) => q.clamp(MIN_QUALITY as i32, MAX_QUALITY as i32) as u8,
        None => DEFAULT_QUALITY,
    }
}

/// Run the whole pipeline for one job: load, shrink, re-encode, report.
/// Strictly sequential and fail-fast; any error before the encoder's
/// write leaves no output file behind, and the input file is never
/// modified on any path.
pub fn process_job(job: &CompressionJob) -> Result<CompressionResult> {
    let loaded = load_image(&job.input_path)?;
    verbose!(
        "Loaded {} image, {}x{}",
        loaded.format,
        loaded.width(),
        loaded.height()
    );

    let loaded = shrink_to_fit(loaded, job.max_width, job.max_height);

    encode_image(&loaded, job.quality, &job.output_path)?;

    report(&job.input_path, &job.output_path)
}

/// CLI entry point around [`process_job`]: spinner while working,
/// summary lines when done.
pub fn compress_image(job: &CompressionJob) -> Result<()> {
    info!("🗜️  Compressing image: {:?}", job.input_path);
    info!("📁 Output: {:?}", job.output_path);

    let pb = spinner("Processing...");
    let result = process_job(job);
    pb.finish_and_clear();

    let result = result?;
    print_result(&result);
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = if crate::logger::is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

fn print_result(result: &CompressionResult) {
    info!(
        "📊 Original size: {} ({})",
        result.original_bytes,
        format_file_size(result.original_bytes)
    );
    info!(
        "📈 Compressed size: {} ({})",
        result.compressed_bytes,
        format_file_size(result.compressed_bytes)
    );

    if result.reduction_percent >= 0.0 {
        info!(
            "✅ Reduced file size by {:.1}%",
            result.reduction_percent
        );
    } else {
        info!(
            "⚠️  File size increased by {:.1}%",
            result.reduction_percent.abs()
        );
    }
}
