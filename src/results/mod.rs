//! Benchmark result import
//!
//! Turns the harness's tab-separated export into an immutable [`Dataset`].

pub mod dataset;
pub mod error;
pub mod parser;
pub mod record;

pub use dataset::Dataset;
pub use error::ImportError;
pub use parser::{parse, parse_lenient_integer};
pub use record::BenchmarkRecord;
