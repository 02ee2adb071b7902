use crate::constants::COMPRESSED_SUFFIX;
use crate::error::{CompressionError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Derive the output path for a compression run.
///
/// Without an explicit output, the input's stem gains a `_compressed`
/// suffix and keeps its extension (`photo.jpg` -> `photo_compressed.jpg`).
/// An explicit output is used verbatim, except that writing over the
/// input itself is rejected with [`CompressionError::InvalidOutputPath`].
///
/// The output directory is not created or checked here; a missing or
/// unwritable directory surfaces as a write error in the encoder.
pub fn resolve_output_path(input: &Path, explicit: Option<PathBuf>) -> Result<PathBuf> {
    validate_input_file(input)?;

    let output = match explicit {
        Some(path) => {
            if same_file(input, &path) {
                return Err(CompressionError::InvalidOutputPath(path));
            }
            path
        }
        None => derive_default_output(input),
    };

    Ok(output)
}

/// Input must exist, be a regular file, and be readable. A
/// permission-denied input is reported the same way as a missing one;
/// the check's file handle is dropped immediately.
pub fn validate_input_file(input: &Path) -> Result<()> {
    if !input.exists() || !input.is_file() {
        return Err(CompressionError::FileNotFound(input.to_path_buf()));
    }
    File::open(input).map_err(|_| CompressionError::FileNotFound(input.to_path_buf()))?;
    Ok(())
}

fn derive_default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, COMPRESSED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, COMPRESSED_SUFFIX),
    };

    input.with_file_name(name)
}

/// Compare paths on canonical form where possible so that `./photo.jpg`
/// and `photo.jpg` are recognized as the same file. The output usually
/// does not exist yet, so canonicalization of it may fail; fall back to
/// a lexical comparison in that case.
fn same_file(input: &Path, output: &Path) -> bool {
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    }
}
