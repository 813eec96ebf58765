//! Knows how to run & verify the comparison cost of the counting searches.\
//! See `tests/counting_search_tests.rs` for examples.

use crate::{
    counting_search::types::SearchMode,
    cost_analysis::{
        comparison_analysis::analyse_comparison_complexity,
        types::{
            SearchCostAnalysis,
            SearchCostComplexity,
            SearchCostMeasurements,
            SearchPassesInfo,
            ComparisonMeasurements,
        },
    },
    features::OUTPUT,
    runners::common::*,
};


/// Runs one search per pass -- `pass1_target` through `pass1_sequence`, then `pass2_target`
/// through the (longer) `pass2_sequence` -- and matches the observed comparison cost growth
/// against `expected_max_cost_complexity`, panicking with a detailed report when the search
/// cost grew worse than declared.\
/// Comparison counts are exact, so there is no retry logic here: a mismatch is a real
/// contract violation, never a flaky measurement.
pub fn test_search_algorithm<Element: Ord + Clone>(test_name:                    &str,
                                                   mode:                         SearchMode,
                                                   pass1_sequence:               &[Element],
                                                   pass1_target:                 &Element,
                                                   pass2_sequence:               &[Element],
                                                   pass2_target:                 &Element,
                                                   expected_max_cost_complexity: SearchCostComplexity) {
    OUTPUT(&format!("Verifying the comparison costs of '{}':\n", test_name));
    let pass1_result = run_search_pass_verbosely("  Pass 1: ", "", pass1_target, pass1_sequence, mode, OUTPUT);
    let pass2_result = run_search_pass_verbosely("; Pass 2: ", "\n\n", pass2_target, pass2_sequence, mode, OUTPUT);
    conclude_analysis(test_name, mode,
                      pass1_sequence.len() as u32, pass2_sequence.len() as u32,
                      pass1_result, pass2_result,
                      expected_max_cost_complexity);
}

/// Runs one all-targets batch per pass -- every element of each sequence searched for once,
/// fanned out over `threads` scoped threads -- and matches the observed comparison cost
/// growth against `expected_max_cost_complexity`, panicking with a detailed report when the
/// aggregated search cost grew worse than declared.\
/// The summed counts are independent of `threads`, which only exercises that concurrent
/// callers don't disturb each other.
pub fn test_batch_search_algorithm<Element: Ord + Clone + Sync>(test_name:                    &str,
                                                                mode:                         SearchMode,
                                                                pass1_sequence:               &[Element],
                                                                pass2_sequence:               &[Element],
                                                                threads:                      u32,
                                                                expected_max_cost_complexity: SearchCostComplexity) {
    OUTPUT(&format!("Verifying the batch comparison costs of '{}':\n", test_name));
    let pass1_result = run_batch_pass_verbosely("  Pass 1: ", "", pass1_sequence, mode, threads, OUTPUT);
    let pass2_result = run_batch_pass_verbosely("; Pass 2: ", "\n\n", pass2_sequence, mode, threads, OUTPUT);
    conclude_analysis(test_name, mode,
                      pass1_sequence.len() as u32, pass2_sequence.len() as u32,
                      pass1_result, pass2_result,
                      expected_max_cost_complexity);
}

/// Shared tail of the verification runners: analyses the two passes' counts, reports
/// the analysis through [OUTPUT] and panics on a cost complexity worse than declared.
fn conclude_analysis(test_name:                    &str,
                     mode:                         SearchMode,
                     pass1_sequence_len:           u32,
                     pass2_sequence_len:           u32,
                     pass1_result:                 PassResult,
                     pass2_result:                 PassResult,
                     expected_max_cost_complexity: SearchCostComplexity) {
    let measurements = SearchCostMeasurements {
        measurement_name: test_name,
        mode,
        passes_info: SearchPassesInfo {
            pass_1_sequence_len: pass1_sequence_len,
            pass_2_sequence_len: pass2_sequence_len,
            pass_1_searches:     pass1_result.searches,
            pass_2_searches:     pass2_result.searches,
        },
        comparison_measurements: ComparisonMeasurements {
            pass_1_comparisons: pass1_result.comparisons,
            pass_2_comparisons: pass2_result.comparisons,
        },
    };
    let observed_cost_complexity = analyse_comparison_complexity(&measurements.passes_info, &measurements.comparison_measurements);
    let cost_analysis = SearchCostAnalysis {
        cost_complexity:     observed_cost_complexity,
        search_measurements: measurements,
    };

    OUTPUT(&format!("{}\n", cost_analysis));

    if observed_cost_complexity as u32 > expected_max_cost_complexity as u32 {
        let msg = format!("\n ** Search cost mismatch on '{}': maximum: {:?}, measured: {:?} -- comparison counts are deterministic, so this is a real contract violation\n\n", test_name, expected_max_cost_complexity, observed_cost_complexity);
        OUTPUT(&msg);
        panic!("{}", msg);
    }
}
