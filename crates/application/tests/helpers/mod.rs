#![allow(dead_code)]

pub use mock_record_fetcher::{fixture_zone, MockRecordFetcher};
