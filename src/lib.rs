#![doc = include_str!("../README.md")]

pub mod counting_search;
pub mod cost_analysis;
pub mod runners;
mod features;


// exported symbols
pub use {
    counting_search::{
        search,
        search_with_mode_name,
        linear_search,
        binary_search,
        types::{
            SearchMode,
            SearchOutcome,
            SearchResult,
            InvalidSearchMode,
        },
    },
    cost_analysis::types::SearchCostComplexity,
    features::OUTPUT,
    runners::standard::{test_search_algorithm, test_batch_search_algorithm},
};
