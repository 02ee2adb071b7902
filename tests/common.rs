use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Build a photographic-looking gradient so JPEG actually has something
/// to compress; a flat color would make size comparisons meaningless.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ]);
    }
    DynamicImage::ImageRgb8(img)
}

pub fn create_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => ImageFormat::Png,
        Some("gif") => ImageFormat::Gif,
        Some("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Jpeg,
    };
    gradient_image(width, height)
        .save_with_format(&path, format)
        .unwrap();
    path
}
