//! Command-line and environment configuration for the report server.

use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "backend",
    about = "Serves the ad report viewer and forwards its API calls to the report service"
)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "REPORT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "REPORT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the report service, e.g. `https://reports.example.com`.
    /// When unset, the API routes answer 503.
    #[arg(long, env = "REPORT_UPSTREAM_URL")]
    pub upstream: Option<String>,

    /// Per-request timeout for upstream calls. No timeout when unset.
    #[arg(long, env = "REPORT_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Do not open the default browser on startup.
    #[arg(long)]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}
