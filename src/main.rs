use std::error::Error;

use tracing_subscriber::EnvFilter;

mod entry;

pub const ROOT_CONFIG_PATH: &str = "./config";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    entry::run()
}
