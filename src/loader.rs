use crate::error::{CompressionError, Result};
use crate::resolve::validate_input_file;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fmt;
use std::path::Path;

/// The closed set of formats this tool re-encodes. Anything else is
/// rejected at load time rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Lossy; quality maps directly onto the encoder setting
    Jpeg,
    /// Lossless; quality tunes compression effort, not fidelity
    Png,
    /// Lossless; quality is accepted but has no effect
    Gif,
}

impl SourceFormat {
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            ImageFormat::Png => Some(SourceFormat::Png),
            ImageFormat::Gif => Some(SourceFormat::Gif),
            _ => None,
        }
    }

    pub fn to_image_format(self) -> ImageFormat {
        match self {
            SourceFormat::Jpeg => ImageFormat::Jpeg,
            SourceFormat::Png => ImageFormat::Png,
            SourceFormat::Gif => ImageFormat::Gif,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpg",
            SourceFormat::Png => "png",
            SourceFormat::Gif => "gif",
        }
    }

    pub fn is_lossy(self) -> bool {
        matches!(self, SourceFormat::Jpeg)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
            SourceFormat::Gif => "GIF",
        };
        write!(f, "{}", name)
    }
}

/// A decoded raster plus the format it was stored in on disk.
#[derive(Debug)]
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Open and decode the input image.
///
/// The format is classified from the file's magic bytes, falling back to
/// the path extension when the content is too short to identify (for
/// example a zero-byte `photo.png`). Formats outside JPEG/PNG/GIF fail
/// with [`CompressionError::UnsupportedFormat`]; decode failures on a
/// supported format fail with [`CompressionError::CorruptImage`]. The
/// file handle lives inside this function and is released on both paths.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    validate_input_file(path)?;

    let reader = ImageReader::open(path)?.with_guessed_format()?;

    let format = match reader.format().and_then(SourceFormat::from_image_format) {
        Some(format) => format,
        None => {
            let shown = match reader.format() {
                Some(other) => format!("{:?}", other).to_lowercase(),
                None => describe_extension(path),
            };
            return Err(CompressionError::UnsupportedFormat(shown));
        }
    };

    let image = reader
        .decode()
        .map_err(|source| CompressionError::CorruptImage {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(LoadedImage { image, format })
}

fn describe_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_else(|| "unknown".to_string())
}
