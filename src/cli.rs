use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imgpress",
    about = "Re-encode a single image into a size-reduced copy",
    long_about = "imgpress compresses one image per invocation, writing a size-reduced copy \
                  next to the original (or to --output) and never touching the input file. \
                  JPEG, PNG and GIF inputs are re-encoded in their own format.",
    version,
    after_help = "EXAMPLES:\n  \
    imgpress photo.jpg\n  \
    imgpress photo.jpg -q 70 --max-width 1920\n  \
    imgpress scan.png -o thumbnails/scan_small.png"
)]
pub struct Args {
    #[arg(help = "Input image file path")]
    pub input: PathBuf,

    #[arg(
        short = 'q',
        long,
        allow_negative_numbers = true,
        help = "Compression quality (0-100, default: 85)",
        long_help = "Compression quality from 0 (smallest) to 100 (best). Values outside the \
                     range are clamped, not rejected. For JPEG this is the lossy encoder \
                     quality; for PNG it selects the lossless compression effort \
                     (>=90 Zopfli, >=70 high, below that standard); GIF ignores it."
    )]
    pub quality: Option<i32>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Maximum width in pixels (0 = unbounded)",
        long_help = "Shrink the image so its width does not exceed this value, preserving \
                     aspect ratio. Images are never enlarged."
    )]
    pub max_width: u32,

    #[arg(
        long,
        default_value_t = 0,
        help = "Maximum height in pixels (0 = unbounded)",
        long_help = "Shrink the image so its height does not exceed this value, preserving \
                     aspect ratio. Images are never enlarged."
    )]
    pub max_height: u32,

    #[arg(
        short = 'o',
        long,
        help = "Output file path (default: <stem>_compressed<ext>)",
        long_help = "Where to write the compressed copy. Defaults to the input filename with \
                     a _compressed suffix before the extension. Writing over the input file \
                     is rejected."
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Suppress all status output")]
    pub quiet: bool,

    #[arg(long, help = "Print extra detail about each pipeline step")]
    pub verbose: bool,
}
