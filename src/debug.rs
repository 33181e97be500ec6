//! Debug logging utilities
//!
//! Logging is off until `init(true)` is called (the `--verbose` flag).
//! Lines go to stderr so stdout only carries the build confirmation.

use std::io::{self, Write};
use std::sync::Mutex;

type Sink = Box<dyn Write + Send>;

static DEBUG_SINK: Mutex<Option<Sink>> = Mutex::new(None);

/// Enable or disable debug logging to stderr
pub fn init(enabled: bool) {
    if enabled {
        init_with(Box::new(io::stderr()));
    } else if let Ok(mut guard) = DEBUG_SINK.lock() {
        *guard = None;
    }
}

/// Route debug logging to an arbitrary writer
pub fn init_with(sink: Sink) {
    if let Ok(mut guard) = DEBUG_SINK.lock() {
        *guard = Some(sink);
    }
}

/// Log a message with a timestamp
pub fn log(message: &str) {
    if let Ok(mut guard) = DEBUG_SINK.lock() {
        if let Some(ref mut sink) = *guard {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(sink, "[{}] {}", timestamp, message);
            let _ = sink.flush();
        }
    }
}

/// Log a message with a category prefix
pub fn log_category(category: &str, message: &str) {
    log(&format!("[{}] {}", category, message));
}

/// Macro for convenient debug logging
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug::log(&format!($($arg)*))
    };
}
