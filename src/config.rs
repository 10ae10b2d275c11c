use tbe::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Warnings and up by default; `RUST_LOG` overrides.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
