//! Domain types shared by the providers and the resolver

pub mod config;
pub mod error;
pub mod log;
pub mod rate;
pub mod symbols;

// Re-export main types for cleaner imports
pub use error::{RateError, SymbolParam};
pub use rate::ExchangeRate;
pub use symbols::{SymbolTable, Symbols};
