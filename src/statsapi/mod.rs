//! Stats API integration: HTTP client, schedule resolution, payload types,
//! and record extraction.

pub mod extract;
pub mod http;
pub mod schedule;
pub mod types;
