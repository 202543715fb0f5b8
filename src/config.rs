use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "beaconr")]
#[command(about = "GA4GH Beacon allele query service")]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "BEACON_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BEACON_PORT", default_value = "8080")]
    pub port: u16,

    /// Enable CORS for all origins
    #[arg(long, env = "BEACON_CORS", default_value = "true")]
    pub cors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Beacon identifier reported by the info endpoint
    #[arg(long, env = "BEACON_ID", default_value = "org.example.beaconr")]
    pub beacon_id: String,

    /// Organization operating this beacon
    #[arg(long, env = "BEACON_ORGANIZATION", default_value = "Example Organization")]
    pub organization: String,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
