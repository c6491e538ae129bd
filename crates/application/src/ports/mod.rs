mod record_fetcher;

pub use record_fetcher::RecordFetcher;
