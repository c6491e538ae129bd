use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Recursive resolver all queries are sent to.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Retry over TCP when a UDP response comes back truncated.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.server.parse().ok()
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout_ms: default_query_timeout_ms(),
            tcp_fallback: true,
        }
    }
}

fn default_server() -> String {
    "127.0.0.1:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}
