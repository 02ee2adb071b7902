use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a full pipeline run, sized from the files on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub output_path: PathBuf,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    /// `100 * (1 - compressed/original)`. Negative when the output came
    /// out larger than the input, so callers can see compression backfired.
    pub reduction_percent: f64,
}

/// Stat both files and compute the size reduction. No side effects
/// beyond the two metadata calls.
pub fn report(input: &Path, output: &Path) -> Result<CompressionResult> {
    let original_bytes = fs::metadata(input)?.len();
    let compressed_bytes = fs::metadata(output)?.len();

    Ok(CompressionResult {
        output_path: output.to_path_buf(),
        original_bytes,
        compressed_bytes,
        reduction_percent: reduction_percent(original_bytes, compressed_bytes),
    })
}

pub fn reduction_percent(original_bytes: u64, compressed_bytes: u64) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    (original_bytes as f64 - compressed_bytes as f64) / original_bytes as f64 * 100.0
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= THRESHOLD && unit < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
