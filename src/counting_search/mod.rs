//! Exports the comparison-counting search operations, as well as the types needed to operate on them. See:
//!   - [types]
//!
//! ... and, most importantly, tests the documented comparison counts on concrete sequences. See [counting_search::tests].

mod counting_search;
pub use counting_search::*;
pub mod types;
