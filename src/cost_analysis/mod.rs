//! Exports the search cost complexity analysis functions, as well as the needed types to operate on them. See:
//!   - [comparison_analysis]
//!   - [types]
//!   - [presentation]
//!
//! ... and, most importantly, tests the analysis on known comparison-count progressions. See [cost_analysis::tests].

mod cost_analysis;
pub use cost_analysis::*;
pub mod comparison_analysis;
pub mod types;
pub mod presentation;
