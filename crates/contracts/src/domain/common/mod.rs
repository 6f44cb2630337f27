//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod dates;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use dates::{check_date_range, date_input, format_date, parse_date, truncate_datetime};
