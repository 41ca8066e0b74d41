//! debuggy's own diagnostics on the `log` facade.
//!
//! Installs a recording logger for this test binary and checks which
//! internal targets fire.

use std::sync::{Mutex, Once};

use debuggy::testing::{CaptureSink, ManualClock, MemoryFlags};
use debuggy::{DebuggyLogBuilder, LoggerOptions, create_logger};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(String, Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct Recorder;

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((
            record.target().to_string(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&Recorder).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn recorded(target: &str, needle: &str) -> Vec<Level> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(t, _, message)| t == target && message.contains(needle))
        .map(|(_, level, _)| *level)
        .collect()
}

fn enabled_options() -> LoggerOptions {
    LoggerOptions::new()
        .flag_source(MemoryFlags::new().with("DEBUG", "1"))
        .clock(ManualClock::from_millis(0, 0))
}

#[test]
fn test_engine_instantiation_is_traced_once() {
    install();
    let before = recorded("debuggy::engine", "instantiated").len();

    let logger = create_logger(enabled_options().sink(CaptureSink::new()));
    logger.child("a").debug(["one"]).unwrap();
    logger.child("b").debug(["two"]).unwrap();

    let after = recorded("debuggy::engine", "instantiated");
    assert!(after.len() > before);
    assert!(after.iter().all(|level| *level == Level::Trace));
}

#[test]
fn test_sink_failure_is_warned() {
    install();
    let logger = create_logger(enabled_options().sink(CaptureSink::failing()));

    assert!(logger.child("a").debug(["lost"]).is_err());
    assert!(recorded("debuggy::sink", "capture sink closed").contains(&Level::Warn));
}

#[test]
fn test_bridge_reports_undelivered_records() {
    install();
    let bridge = DebuggyLogBuilder::new()
        .options(enabled_options().sink(CaptureSink::failing()))
        .build();

    bridge.log(
        &Record::builder()
            .level(Level::Info)
            .target("orders::checkout")
            .args(format_args!("paid"))
            .build(),
    );

    let warnings = recorded("debuggy::bridge", "orders::checkout");
    assert_eq!(warnings, [Level::Warn]);
}
