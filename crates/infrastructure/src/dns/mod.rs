pub mod fetcher;
pub mod forwarding;
pub mod transport;

pub use fetcher::UpstreamRecordFetcher;
pub use forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::{tcp::TcpTransport, udp::UdpTransport, DnsTransport, TransportResponse};
