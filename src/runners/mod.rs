//! Runs the counting searches in passes & verifies their comparison costs. See:
//!   - [standard]

pub mod standard;
pub mod common;
