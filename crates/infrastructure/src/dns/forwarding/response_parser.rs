use super::record_type_map::RecordTypeMapper;
use caalookup_domain::{CaaRecord, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::CAA;
use hickory_proto::rr::{Name, RData};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Target of the first CNAME in the answer section.
    pub cname: Option<String>,

    /// Target of the first DNAME in the answer section.
    pub dname: Option<String>,

    pub caa: Vec<CaaRecord>,

    pub answer_count: usize,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// NOERROR and NXDOMAIN are answers; everything else aborts the lookup.
    pub fn is_acceptable(&self) -> bool {
        matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut cname: Option<String> = None;
        let mut dname: Option<String> = None;
        let mut caa = Vec::new();

        for record in message.answers() {
            match record.data() {
                RData::CNAME(canonical) => {
                    if cname.is_none() {
                        cname = Some(canonical.to_ascii());
                    }
                }
                RData::CAA(record_data) => {
                    caa.push(Self::caa_to_domain(record_data));
                }
                RData::Unknown { rdata, .. } if RecordTypeMapper::is_dname(record.record_type()) => {
                    if dname.is_none() {
                        let mut decoder = BinDecoder::new(rdata.anything());
                        let target = Name::read(&mut decoder).map_err(|e| {
                            DomainError::InvalidDnsResponse(format!(
                                "Malformed DNAME target for {}: {}",
                                record.name(),
                                e
                            ))
                        })?;
                        dname = Some(target.to_ascii());
                    }
                }
                _ => {}
            }
        }

        debug!(
            id = id,
            rcode = ?rcode,
            truncated = truncated,
            cname = ?cname,
            dname = ?dname,
            caa = caa.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            cname,
            dname,
            caa,
            answer_count: message.answers().len(),
        })
    }

    /// Flags and value are kept exactly as they appear in the RDATA.
    fn caa_to_domain(record: &CAA) -> CaaRecord {
        CaaRecord::new(
            record.flags(),
            record.tag(),
            String::from_utf8_lossy(record.raw_value()).into_owned(),
        )
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
