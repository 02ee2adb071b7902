pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

pub const COMPRESSED_SUFFIX: &str = "_compressed";

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
