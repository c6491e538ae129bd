pub mod errors;
pub mod logging;
pub mod resolution;
pub mod root;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolution::ResolutionConfig;
pub use root::{CliOverrides, Config};
pub use upstream::UpstreamConfig;
