use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
#[command(about = "Food pickup locations backend")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:7280")]
    pub quickwit_url: Url,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// NDJSON file with one location per line, loaded at startup.
    #[arg(long)]
    pub locations: Option<PathBuf>,
    #[arg(long)]
    #[arg(default_value_t = 5.0)]
    pub default_radius_km: f64,
    /// Minimum spacing between two stored locations.
    #[arg(long)]
    #[arg(default_value_t = 0.05)]
    pub duplicate_threshold_km: f64,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
}
