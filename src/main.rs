mod api_client;
mod client;
mod cmd;
mod config;
mod error;
mod fan_out;
mod importer;
mod normalize;
mod query;
mod records;
mod store;
#[cfg(test)]
mod test_support;
mod types;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::cmd::Args;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("club_seasons=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    Args::parse().run().await
}
