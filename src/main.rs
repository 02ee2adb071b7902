use clap::Parser;
use imgpress::cli::Args;
use imgpress::processing::{compress_image, CompressionJob};
use imgpress::{error, logger};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    let job = match CompressionJob::new(
        args.input,
        args.output,
        args.quality,
        args.max_width,
        args.max_height,
    ) {
        Ok(job) => job,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match compress_image(&job) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
