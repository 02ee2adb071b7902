use crate::loader::LoadedImage;
use image::imageops::FilterType;

/// Compute the dimensions an image should be scaled to so it fits within
/// the given bounds. A bound of 0 means unbounded on that axis; both 0
/// means no resizing at all. The scale factor is shared by both axes so
/// the aspect ratio is preserved, and it is capped at 1.0 so images are
/// only ever shrunk. Results are rounded and floored at 1 pixel.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if max_width == 0 && max_height == 0 {
        return (width, height);
    }

    let mut scale = 1.0_f64;
    if max_width > 0 {
        scale = scale.min(max_width as f64 / width as f64);
    }
    if max_height > 0 {
        scale = scale.min(max_height as f64 / height as f64);
    }

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    (new_width, new_height)
}

/// Downscale the image to fit within the bounds, preserving aspect ratio.
/// Returns the image untouched when no resizing is needed.
pub fn shrink_to_fit(mut loaded: LoadedImage, max_width: u32, max_height: u32) -> LoadedImage {
    let (width, height) = (loaded.width(), loaded.height());
    let (new_width, new_height) = fit_dimensions(width, height, max_width, max_height);

    if (new_width, new_height) != (width, height) {
        crate::verbose!(
            "Resizing {}x{} -> {}x{}",
            width,
            height,
            new_width,
            new_height
        );
        loaded.image = loaded
            .image
            .resize_exact(new_width, new_height, FilterType::Lanczos3);
    }

    loaded
}
