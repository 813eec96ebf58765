//! Contains functions to perform the search cost complexity analysis on comparison counts.

use crate::cost_analysis::{
    analyse_cost_complexity,
    types::*,
};


/// Matches the comparison counts of two search passes -- run over sequences of different
/// lengths -- against the complexity curves. Works for single-target passes as well as
/// for all-targets batch passes; the counts are exact, so, unlike wall-clock measurements,
/// the outcome is fully reproducible.
pub fn analyse_comparison_complexity(passes_info:  &SearchPassesInfo,
                                     measurements: &ComparisonMeasurements) -> SearchCostComplexity {

    // comparison count variation
    let c1 = measurements.pass_1_comparisons as f64;
    let c2 = measurements.pass_2_comparisons as f64;

    // sequence lengths
    let n1 = passes_info.pass_1_sequence_len as f64;
    let n2 = passes_info.pass_2_sequence_len as f64;

    analyse_cost_complexity(c1, c2, n1, n2)
}
