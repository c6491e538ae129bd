use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{tcp::TcpTransport, udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use caalookup_application::ports::RecordFetcher;
use caalookup_domain::{CaaRecord, DomainError, DomainName, RecordType};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// `RecordFetcher` backed by a single recursive resolver.
///
/// Queries go out over UDP; a truncated answer is retried over TCP when a
/// fallback transport is configured. Only NOERROR and NXDOMAIN responses are
/// accepted.
pub struct UpstreamRecordFetcher {
    primary: Arc<dyn DnsTransport>,
    fallback: Option<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl UpstreamRecordFetcher {
    pub fn new(server: SocketAddr, timeout: Duration, tcp_fallback: bool) -> Self {
        let fallback: Option<Arc<dyn DnsTransport>> = if tcp_fallback {
            Some(Arc::new(TcpTransport::new(server)))
        } else {
            None
        };

        Self {
            primary: Arc::new(UdpTransport::new(server)),
            fallback,
            timeout,
        }
    }

    /// Sends one query and returns the validated response.
    pub async fn exchange(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query(name, &record_type)?;

        let mut response = self.send(self.primary.as_ref(), id, &request).await?;

        if response.truncated {
            match &self.fallback {
                Some(fallback) => {
                    debug!(
                        name = %name,
                        record_type = %record_type,
                        protocol = fallback.protocol_name(),
                        "Truncated response, retrying"
                    );
                    response = self.send(fallback.as_ref(), id, &request).await?;
                }
                None => {
                    warn!(
                        name = %name,
                        record_type = %record_type,
                        "Truncated response and no fallback transport, using partial answer"
                    );
                }
            }
        }

        debug!(
            name = %name,
            record_type = %record_type,
            answers = response.answer_count,
            nxdomain = response.is_nxdomain(),
            "Upstream answered"
        );

        if !response.is_acceptable() {
            return Err(DomainError::UnexpectedResponseCode {
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
                record_type: record_type.to_string(),
                domain: name.to_string(),
            });
        }

        Ok(response)
    }

    async fn send(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        request: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let reply = transport.send(request, self.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                reply.protocol_used, response.id, id
            )));
        }

        Ok(response)
    }

    fn alias_target(
        name: &DomainName,
        record_type: RecordType,
        target: Option<String>,
    ) -> Result<Option<DomainName>, DomainError> {
        target
            .map(|t| {
                DomainName::from_str(&t).map_err(|e| {
                    DomainError::InvalidDnsResponse(format!(
                        "{} target for {} is not usable: {}",
                        record_type, name, e
                    ))
                })
            })
            .transpose()
    }
}

#[async_trait]
impl RecordFetcher for UpstreamRecordFetcher {
    async fn query_cname(&self, name: &DomainName) -> Result<Option<DomainName>, DomainError> {
        let response = self.exchange(name, RecordType::CNAME).await?;
        Self::alias_target(name, RecordType::CNAME, response.cname)
    }

    async fn query_dname(&self, name: &DomainName) -> Result<Option<DomainName>, DomainError> {
        let response = self.exchange(name, RecordType::DNAME).await?;
        Self::alias_target(name, RecordType::DNAME, response.dname)
    }

    async fn query_caa(&self, name: &DomainName) -> Result<Vec<CaaRecord>, DomainError> {
        let response = self.exchange(name, RecordType::CAA).await?;
        Ok(response.caa)
    }
}
