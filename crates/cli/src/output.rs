use caalookup_domain::{CaaRecord, CaaRecordSet, DomainName};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct LookupReport<'a> {
    domain: &'a str,
    owner: Option<&'a str>,
    records: &'a [CaaRecord],
}

/// Renders a resolved set. Text mode yields one presentation-format record
/// per line and nothing at all for an empty set.
pub fn render(
    format: OutputFormat,
    domain: &DomainName,
    set: &CaaRecordSet,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(set
            .iter()
            .map(|record| format!("{}\n", record))
            .collect()),
        OutputFormat::Json => {
            let report = LookupReport {
                domain: domain.as_str(),
                owner: set.owner().map(|o| o.as_str()),
                records: set.records(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}
