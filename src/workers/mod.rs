pub mod core;
pub mod fetcher;

pub use fetcher::Fetcher;
