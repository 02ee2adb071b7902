use std::sync::atomic::{AtomicU8, Ordering};

/// Console verbosity for the CLI layer. 0 = quiet, 1 = normal, 2 = verbose.
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

pub fn init(quiet: bool, verbose: bool) {
    // --quiet wins over --verbose when both are given
    let level = if quiet {
        0
    } else if verbose {
        2
    } else {
        1
    };
    VERBOSITY.store(level, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    VERBOSITY.load(Ordering::Relaxed) == 0
}

pub fn is_verbose() -> bool {
    VERBOSITY.load(Ordering::Relaxed) >= 2
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            println!("🔍 {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*));
    };
}
