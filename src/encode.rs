use crate::constants::{LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, ZOPFLI_ITERATIONS};
use crate::error::{CompressionError, Result};
use crate::loader::{LoadedImage, SourceFormat};
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::num::NonZeroU8;
use std::path::Path;

/// Re-encode the raster in its source format and write it to `output`.
/// Returns the number of bytes written.
///
/// Quality is expected to already be clamped to 0-100. Its meaning is
/// per-format: the JPEG encoder's lossy quality setting, the PNG
/// deflater effort tier, and nothing at all for GIF (lossless, accepted
/// for format-agnostic callers).
///
/// A missing or unwritable output directory fails with
/// [`CompressionError::Write`]; a codec serialization failure with
/// [`CompressionError::Encode`]. The input file is never touched.
pub fn encode_image(loaded: &LoadedImage, quality: u8, output: &Path) -> Result<u64> {
    match loaded.format {
        SourceFormat::Jpeg => encode_jpeg(loaded, quality, output)?,
        SourceFormat::Png => encode_png(loaded, quality, output)?,
        SourceFormat::Gif => encode_gif(loaded, output)?,
    }

    let written = fs::metadata(output)?.len();
    Ok(written)
}

fn encode_jpeg(loaded: &LoadedImage, quality: u8, output: &Path) -> Result<()> {
    // The jpeg codec rejects quality 0; clamped floor maps to its minimum
    let quality = quality.max(1);

    let file = create_output_file(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);

    loaded
        .image
        .write_with_encoder(encoder)
        .map_err(|e| encode_error(output, e))?;
    Ok(())
}

/// PNG output is lossless regardless of the quality value; the number
/// selects how hard oxipng's deflater works on the final byte stream.
fn encode_png(loaded: &LoadedImage, quality: u8, output: &Path) -> Result<()> {
    let scratch_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Randomly named scratch file in the output's directory; it can never
    // collide with the input or any other user path, and it is removed on
    // every exit path once dropped
    let scratch = tempfile::Builder::new()
        .prefix(".imgpress-")
        .suffix(".png")
        .tempfile_in(scratch_dir)
        .map_err(|source| CompressionError::Write {
            path: output.to_path_buf(),
            source,
        })?;

    {
        let mut writer = BufWriter::new(scratch.as_file());
        loaded
            .image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| encode_error(output, e))?;
        writer.flush().map_err(|source| CompressionError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }

    let mut options = Options::from_preset(4);
    options.force = true;
    options.deflate = if quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        }
    } else if quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(scratch.path().to_path_buf());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &options).map_err(|e| CompressionError::Encode {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// GIF re-encoding is lossless; palette and frame data pass through the
/// codec unchanged in fidelity.
fn encode_gif(loaded: &LoadedImage, output: &Path) -> Result<()> {
    let file = create_output_file(output)?;
    let mut writer = BufWriter::new(file);
    loaded
        .image
        .write_to(&mut writer, ImageFormat::Gif)
        .map_err(|e| encode_error(output, e))?;
    Ok(())
}

/// The resolver defers directory checks to write time; this is where a
/// missing or unwritable output directory turns into a `Write` error.
fn create_output_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| CompressionError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn encode_error(output: &Path, source: image::ImageError) -> CompressionError {
    CompressionError::Encode {
        path: output.to_path_buf(),
        reason: source.to_string(),
    }
}
