//! caalookup infrastructure: DNS wire handling and the upstream record fetcher
pub mod dns;
