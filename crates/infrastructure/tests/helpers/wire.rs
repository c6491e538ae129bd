//! Hand-built DNS wire messages for parser and server tests.
//!
//! Names are written uncompressed, which is what RFC 6672 requires for DNAME
//! RDATA and keeps the builder trivial.

pub const TYPE_CNAME: u16 = 5;
pub const TYPE_DNAME: u16 = 39;
pub const TYPE_CAA: u16 = 257;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[derive(Debug, Clone)]
pub struct WireRecord {
    pub owner: String,
    pub rtype: u16,
    pub rdata: Vec<u8>,
}

impl WireRecord {
    pub fn cname(owner: &str, target: &str) -> Self {
        Self {
            owner: owner.to_string(),
            rtype: TYPE_CNAME,
            rdata: encode_name(target),
        }
    }

    pub fn dname(owner: &str, target: &str) -> Self {
        Self {
            owner: owner.to_string(),
            rtype: TYPE_DNAME,
            rdata: encode_name(target),
        }
    }

    pub fn caa(owner: &str, flags: u8, tag: &str, value: &str) -> Self {
        let mut rdata = vec![flags, tag.len() as u8];
        rdata.extend_from_slice(tag.as_bytes());
        rdata.extend_from_slice(value.as_bytes());
        Self {
            owner: owner.to_string(),
            rtype: TYPE_CAA,
            rdata,
        }
    }

    pub fn issue(owner: &str, issuer: &str) -> Self {
        Self::caa(owner, 0, "issue", issuer)
    }
}

#[derive(Debug, Clone)]
pub struct WireResponse {
    pub id: u16,
    pub qname: String,
    pub qtype: u16,
    pub rcode: u8,
    pub truncated: bool,
    pub answers: Vec<WireRecord>,
}

impl WireResponse {
    pub fn new(id: u16, qname: &str, qtype: u16) -> Self {
        Self {
            id,
            qname: qname.to_string(),
            qtype,
            rcode: RCODE_NOERROR,
            truncated: false,
            answers: vec![],
        }
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn answer(mut self, record: WireRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);

        out.extend_from_slice(&self.id.to_be_bytes());
        // QR + RD, TC when truncated
        out.push(0x81 | if self.truncated { 0x02 } else { 0x00 });
        // RA + RCODE
        out.push(0x80 | (self.rcode & 0x0f));
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());

        out.extend_from_slice(&encode_name(&self.qname));
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());

        for record in &self.answers {
            out.extend_from_slice(&encode_name(&record.owner));
            out.extend_from_slice(&record.rtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
            out.extend_from_slice(&300u32.to_be_bytes());
            out.extend_from_slice(&(record.rdata.len() as u16).to_be_bytes());
            out.extend_from_slice(&record.rdata);
        }

        out
    }
}

/// Parsed question of an incoming query: (id, qname, qtype).
pub fn parse_query(bytes: &[u8]) -> Option<(u16, String, u16)> {
    if bytes.len() < 12 {
        return None;
    }
    let id = u16::from_be_bytes([bytes[0], bytes[1]]);

    let mut pos = 12;
    let mut labels = Vec::new();
    loop {
        let len = *bytes.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = bytes.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*bytes.get(pos)?, *bytes.get(pos + 1)?]);
    let qname = if labels.is_empty() {
        ".".to_string()
    } else {
        format!("{}.", labels.join("."))
    };

    Some((id, qname, qtype))
}
