//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpost_core` linkage,
//!   including the logging bootstrap.
//! - Keep stdout deterministic for quick local sanity checks.

use inkpost_core::{core_version, default_log_level, init_logging, ping};

fn main() {
    let log_dir = std::env::temp_dir().join("inkpost-logs");
    match log_dir.to_str() {
        Some(log_dir) => {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("inkpost logging disabled: {err}");
            }
        }
        None => eprintln!("inkpost logging disabled: temp dir is not valid UTF-8"),
    }

    println!("inkpost_core ping={}", ping());
    println!("inkpost_core version={}", core_version());
}
