pub mod cli;
pub mod constants;
pub mod encode;
pub mod error;
pub mod loader;
pub mod logger;
pub mod processing;
pub mod report;
pub mod resize;
pub mod resolve;

pub use encode::encode_image;
pub use error::{CompressionError, Result};
pub use loader::{load_image, LoadedImage, SourceFormat};
pub use processing::{clamp_quality, compress_image, process_job, CompressionJob};
pub use report::{format_file_size, reduction_percent, report, CompressionResult};
pub use resize::{fit_dimensions, shrink_to_fit};
pub use resolve::resolve_output_path;
