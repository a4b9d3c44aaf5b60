use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nowhere to report a failed write to stderr.
            let _ = writeln!(io::stderr(), "{} {} [{}] {}", time(), record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Installs a stderr logger. Fails if the process already has a logger.
pub fn init(loglevel: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: Logger = Logger {};
    log::set_logger(&LOGGER).map(|()| {
        log::set_max_level(loglevel);
    })
}

fn time() -> String {
    let date = Local::now();
    format!("{}", date.format("%Y-%m-%d %H:%M:%S%.3f"))
}
