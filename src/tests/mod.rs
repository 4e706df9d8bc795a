mod scenarios;

use simplelog::{Config, LevelFilter, TestLogger};

/// Route the crate's log output to the test harness.
/// Safe to call from every test: only the first call installs the logger
fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
