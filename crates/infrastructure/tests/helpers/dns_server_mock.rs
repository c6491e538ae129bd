use super::wire::{self, WireRecord, WireResponse};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Authoritative-looking data served by `MockDnsServer`.
#[derive(Debug, Clone, Default)]
pub struct MockZone {
    answers: HashMap<(String, u16), Vec<WireRecord>>,
    rcodes: HashMap<(String, u16), u8>,
    truncate_udp: bool,
    wrong_id: bool,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cname(mut self, owner: &str, target: &str) -> Self {
        self.push(WireRecord::cname(owner, target));
        self
    }

    pub fn with_dname(mut self, owner: &str, target: &str) -> Self {
        self.push(WireRecord::dname(owner, target));
        self
    }

    pub fn with_issue(mut self, owner: &str, issuer: &str) -> Self {
        self.push(WireRecord::issue(owner, issuer));
        self
    }

    pub fn with_caa(mut self, owner: &str, flags: u8, tag: &str, value: &str) -> Self {
        self.push(WireRecord::caa(owner, flags, tag, value));
        self
    }

    pub fn with_rcode(mut self, owner: &str, rtype: u16, rcode: u8) -> Self {
        self.rcodes.insert((owner.to_string(), rtype), rcode);
        self
    }

    /// Every UDP answer comes back empty with TC set; TCP answers in full.
    pub fn truncate_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    pub fn wrong_id(mut self) -> Self {
        self.wrong_id = true;
        self
    }

    fn push(&mut self, record: WireRecord) {
        self.answers
            .entry((record.owner.clone(), record.rtype))
            .or_default()
            .push(record);
    }

    fn lookup(&self, qname: &str, qtype: u16) -> Vec<WireRecord> {
        if let Some(records) = self.answers.get(&(qname.to_string(), qtype)) {
            return records.clone();
        }

        if qtype == wire::TYPE_CNAME {
            return self.synthesize_cname(qname);
        }

        vec![]
    }

    /// RFC 6672 §3.1: a name below a DNAME owner gets the DNAME plus a
    /// synthesized CNAME.
    fn synthesize_cname(&self, qname: &str) -> Vec<WireRecord> {
        let mut rest = qname;
        while let Some(dot) = rest.find('.') {
            rest = &rest[dot + 1..];
            if rest.is_empty() {
                break;
            }

            let key = (rest.to_string(), wire::TYPE_DNAME);
            if let Some(dname) = self.answers.get(&key).and_then(|r| r.first()) {
                let prefix = &qname[..qname.len() - rest.len()];
                let target_rdata = &dname.rdata;
                let target = decode_name(target_rdata);
                let synthesized = format!("{}{}", prefix, target);
                return vec![dname.clone(), WireRecord::cname(qname, &synthesized)];
            }
        }
        vec![]
    }

    fn respond(&self, query: &[u8], over_udp: bool) -> Option<Vec<u8>> {
        let (id, qname, qtype) = wire::parse_query(query)?;
        let id = if self.wrong_id { id.wrapping_add(1) } else { id };

        let mut response = WireResponse::new(id, &qname, qtype);

        if let Some(rcode) = self.rcodes.get(&(qname.clone(), qtype)) {
            return Some(response.rcode(*rcode).encode());
        }

        if over_udp && self.truncate_udp {
            return Some(response.truncated().encode());
        }

        for record in self.lookup(&qname, qtype) {
            response = response.answer(record);
        }
        Some(response.encode())
    }
}

fn decode_name(encoded: &[u8]) -> String {
    let mut labels = Vec::new();
    let mut pos = 0;
    while let Some(&len) = encoded.get(pos) {
        if len == 0 {
            break;
        }
        let start = pos + 1;
        let end = start + len as usize;
        labels.push(String::from_utf8_lossy(&encoded[start..end]).into_owned());
        pos = end;
    }
    if labels.is_empty() {
        ".".to_string()
    } else {
        format!("{}.", labels.join("."))
    }
}

/// Recursive resolver stand-in listening on UDP and TCP at the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let (socket, listener) = Self::bind_pair().await?;
        let addr = socket.local_addr()?;

        let zone = Arc::new(zone);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_zone = Arc::clone(&zone);
        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = udp_zone.respond(&buf[..len], true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            let zone = Arc::clone(&zone);
                            let count = Arc::clone(&tcp_count);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                count.fetch_add(1, Ordering::SeqCst);
                                if let Some(response) = zone.respond(&query, false) {
                                    let _ = stream
                                        .write_all(&(response.len() as u16).to_be_bytes())
                                        .await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Picks an ephemeral UDP port and claims the same port for TCP.
    async fn bind_pair() -> Result<(UdpSocket, TcpListener), std::io::Error> {
        let mut last_err = None;
        for _ in 0..16 {
            let socket = UdpSocket::bind("127.0.0.1:0").await?;
            match TcpListener::bind(socket.local_addr()?).await {
                Ok(listener) => return Ok((socket, listener)),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| std::io::Error::other("no free port pair")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
