pub mod config;
pub mod download;
pub mod error;
pub mod report;

pub use config::FetchTarget;
pub use download::{fetch, fetch_target};
pub use error::FetchError;
