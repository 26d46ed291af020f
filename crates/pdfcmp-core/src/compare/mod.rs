pub mod aggregate;
pub mod engine;
pub mod outcome;

pub use aggregate::Aggregator;
pub use engine::compare_documents;
pub use outcome::{Comparison, ComparisonRow, ComparisonSummary, ErrorBreakdown, ErrorType};
