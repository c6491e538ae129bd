use async_trait::async_trait;
use caalookup_domain::{CaaRecord, DomainError, DomainName};

/// Single-query access to DNS, one record type per call.
///
/// Implementations own every transport concern (protocol fallback,
/// truncation, response-code checks). A name that does not exist is a
/// successful empty answer, not an error.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    /// Target of the CNAME at `name`, if any.
    async fn query_cname(&self, name: &DomainName) -> Result<Option<DomainName>, DomainError>;

    /// Target of the DNAME at `name`, if any.
    async fn query_dname(&self, name: &DomainName) -> Result<Option<DomainName>, DomainError>;

    async fn query_caa(&self, name: &DomainName) -> Result<Vec<CaaRecord>, DomainError>;
}
