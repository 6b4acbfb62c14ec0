mod app;
mod config;
mod error;
mod events;
mod exchange;
mod logger;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use crate::error::AppResult;
use crate::exchange::{CurrencyCache, RedisCache};
use clap::{crate_description, crate_name, crate_version, Arg};
use log::*;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {:#}", crate_name!(), e);
        std::process::exit(1);
    }
}

/// Parse arguments, load configuration and connect the cache before handing
/// control to the interface. Any failure before the interface starts is
/// fatal.
///
async fn run() -> anyhow::Result<()> {
    let matches = clap::App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cache-url")
                .long("cache-url")
                .value_name("URL")
                .help("Redis URL of the currency cache")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(url) = matches.value_of("cache-url") {
        config.cache_url = url.to_owned();
    }

    let logs = logger::init(config.log_level_filter()?)?;
    if let Some(path) = config.file_path() {
        debug!("Loaded configuration from {}", path.display());
    }

    let cache = connect_cache(&config.cache_url)?;
    App::start(config, cache, logs).await
}

fn connect_cache(url: &str) -> AppResult<Arc<dyn CurrencyCache>> {
    info!("Connecting to currency cache...");
    let cache = RedisCache::connect(url)?;
    Ok(Arc::new(cache))
}
