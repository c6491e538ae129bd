use caalookup_domain::{CliOverrides, DomainError, DomainName};
use clap::Parser;
use output::OutputFormat;
use std::io::Write;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::debug;

mod bootstrap;
mod di;
mod output;

/// Exit status for usage problems: bad arguments, bad names, bad config.
const EXIT_USAGE: u8 = 2;
const EXIT_LOOKUP_FAILED: u8 = 1;

#[derive(Parser)]
#[command(name = "caalookup")]
#[command(version)]
#[command(about = "Find the CAA record set that applies to a domain name (RFC 8659)")]
struct Cli {
    /// Fully qualified domain name to look up (must end with '.')
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Recursive resolver to query (ip:port)
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Upper bound on resolution steps
    #[arg(long, value_name = "N")]
    max_recursions: Option<usize>,

    /// Do not retry truncated UDP answers over TCP
    #[arg(long)]
    no_tcp_fallback: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let domain = match DomainName::from_str(&cli.domain) {
        Ok(domain) => domain,
        Err(DomainError::InvalidDomainName(reason)) => {
            eprintln!("Error: {}", reason);
            return ExitCode::from(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("Error: {}: {}", cli.domain, e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        query_timeout_ms: cli.timeout_ms,
        no_tcp_fallback: cli.no_tcp_fallback,
        max_recursions: cli.max_recursions,
        log_level: cli.log_level.clone(),
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    bootstrap::init_logging(&config);
    debug!("caalookup v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = match di::UseCases::new(&config) {
        Ok(use_cases) => use_cases,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let set = match use_cases.resolve_caa.execute(&domain).await {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}: {}", domain, e);
            return ExitCode::from(EXIT_LOOKUP_FAILED);
        }
    };

    let rendered = match output::render(cli.format, &domain, &set) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error: {}: {}", domain, e);
            return ExitCode::from(EXIT_LOOKUP_FAILED);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
    {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_LOOKUP_FAILED);
    }

    ExitCode::SUCCESS
}
