//! caalookup domain layer
pub mod caa_record;
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod recursion_budget;

pub use caa_record::{CaaRecord, CaaRecordSet};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use recursion_budget::{RecursionBudget, DEFAULT_MAX_RECURSIONS};
