//! Google Sheets integration
//!
//! Contains the authenticated Sheets client and the conversion from raw
//! worksheet rows into header-keyed records.

pub mod client;
pub mod records;

// Re-export the types handlers work with (used by api and error)
pub use client::{SheetsClient, SheetsError};
pub use records::QuoteRecord;
