use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Wire the `-v` count to a level filter and install a compact format.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error, // default: only soft-failure diagnostics
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder.filter_level(level);

    builder.format(move |buf, record| {
        let label = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".white(),
            Level::Debug => "debug".bright_black(),
            Level::Trace => "trace".bright_black(),
        };

        if level >= LevelFilter::Debug {
            writeln!(
                buf,
                "{label} {} {}",
                record.target().bright_black(),
                record.args()
            )
        } else {
            writeln!(buf, "{label} {}", record.args())
        }
    });

    builder.init();
}
