//! Process-wide logging setup
//!
//! One-time initialization of level and line format; components log through
//! the `log` macros with no further shared state.

use std::io::Write;

use chrono::Local;
use log::LevelFilter;

/// Initialize logging for the process.
///
/// Line format is `<timestamp> - <thread-name> - <level> - <message>` with a
/// millisecond timestamp. Level is DEBUG when `verbose`, INFO otherwise.
/// `RUST_LOG` still wins when set, so tests and operators can override.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string()),
    )
    .format(|buf, record| {
        let thread = std::thread::current();
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            thread.name().unwrap_or("unnamed"),
            record.level(),
            record.args()
        )
    })
    .try_init()
    .ok();
}
