use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Too many recursions (limit {limit})")]
    TooManyRecursions { limit: usize },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Received {rcode} when looking up {record_type} for {domain}")]
    UnexpectedResponseCode {
        rcode: String,
        record_type: String,
        domain: String,
    },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },
}

impl DomainError {
    /// True for failures that happened while talking to the upstream resolver.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDnsResponse(_)
                | DomainError::UnexpectedResponseCode { .. }
                | DomainError::IoError(_)
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
        )
    }
}
