use log::LevelFilter;

/// Resolve the active log threshold from `RUST_LOG`, defaulting to `info`.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_rust_log_level() -> LevelFilter {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LevelFilter {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to info if parsing fails
    }
}

/// Log sink for the native CLI, writing to stderr so command output on
/// stdout stays clean.
#[cfg(not(target_arch = "wasm32"))]
mod stderr {
    use log::{Metadata, Record};

    pub(super) struct StderrLogger;

    pub(super) static LOGGER: StderrLogger = StderrLogger;

    impl log::Log for StderrLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            eprintln!("{} {}: {}", record.level(), record.target(), record.args());
        }

        fn flush(&self) {}
    }
}

/// Install the stderr logger with the `RUST_LOG` threshold. Called once from
/// the CLI entry point.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_cli_logging() {
    // A second install attempt is harmless; the first logger stays.
    if log::set_logger(&stderr::LOGGER).is_ok() {
        log::set_max_level(get_rust_log_level());
    }
}

/// Log sink forwarding to the browser console. The page has no stderr; this
/// is where the vote path's single diagnostic line ends up.
#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Metadata, Record};
    use wasm_bindgen::JsValue;

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("{}: {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    pub(super) fn install(level: LevelFilter) {
        // A second install attempt is harmless; the first logger stays.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

/// Install the console logger for the page. Called once from the boot path.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logging() {
    console::install(LevelFilter::Info);
}
