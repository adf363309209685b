pub mod fixer;
pub mod http;

pub use http::{Fetch, HttpFetcher};
