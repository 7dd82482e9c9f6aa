pub mod flexible;

// Re-export the normalizer for use by parsers, benchmarks and internal code
pub use flexible::{parse_flexible_date, FlexibleDateError};
