//! Captures warnings emitted through `log` so unit tests can assert on them.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records go to the calling thread's buffer, so parallel tests stay apart.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|c| c.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Runs `f` with an empty warning buffer for this thread.
pub fn capture<T>(f: impl FnOnce() -> T) -> T {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Warn));
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
    f()
}

/// Warnings captured on this thread since the last [`capture`].
pub fn warnings() -> Vec<String> {
    CAPTURED.with(|c| c.borrow().clone())
}
