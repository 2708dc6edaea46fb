use std::error::Error;
use std::fs;

use aras::{AppConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

const SAMPLE_NEWS: &str = include_str!("../data/sample_news.txt");

/// `aras [config.yaml] [article.txt]`
///
/// Prints a comprehensive JSON report for the article, or for the bundled
/// sample when no article is given.
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    init_tracing(&config.logging);

    let text = match args.next() {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_NEWS.to_string(),
    };

    let engine = config.build_engine()?;
    let report = engine.comprehensive(&text)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
