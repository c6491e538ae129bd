use anyhow::anyhow;
use caalookup_application::use_cases::ResolveCaaUseCase;
use caalookup_domain::Config;
use caalookup_infrastructure::dns::UpstreamRecordFetcher;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub resolve_caa: Arc<ResolveCaaUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let server = config.upstream.socket_addr().ok_or_else(|| {
            anyhow!(
                "Upstream server '{}' is not a socket address",
                config.upstream.server
            )
        })?;

        let fetcher = Arc::new(UpstreamRecordFetcher::new(
            server,
            config.upstream.query_timeout(),
            config.upstream.tcp_fallback,
        ));
        debug!(server = %server, "Upstream record fetcher ready");

        Ok(Self {
            resolve_caa: Arc::new(ResolveCaaUseCase::new(
                fetcher,
                config.resolution.max_recursions,
            )),
        })
    }
}
