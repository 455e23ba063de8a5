use std::error::Error;

use alphafade::fade::{adjust_opacity, DEFAULT_OPACITY};
use simple_logger::SimpleLogger;

/// The background asset this tool exists to process.
const TARGET: &str = "public/assets/dark-background.png";

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Warn).init()?;

    adjust_opacity(TARGET, TARGET, DEFAULT_OPACITY)?;
    println!("Added transparency to {TARGET}");

    Ok(())
}
