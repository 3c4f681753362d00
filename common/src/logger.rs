use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", format_line(&timestamp, self.prefix.as_deref(), file, line, message));
    }

    pub fn debug(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            self.log(file, line, message);
        }
    }
}

fn format_line(timestamp: &str, prefix: Option<&str>, file: &str, line: u32, message: &str) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

/// Only the first call has an effect.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::debug(file!(), line!(), &format!($($arg)*))
    };
}
