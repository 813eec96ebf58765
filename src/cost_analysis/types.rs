//! Defines enums & structs returned / shared by the search cost analysis functions.

use std::fmt::{Display, Formatter};
use crate::counting_search::types::SearchMode;
use super::presentation::{comparisons_measurement, comparisons_per_search_measurement};

/// Possible search cost analysis results, in big-O notation, ordered from cheapest
/// to costliest -- which is what makes `observed as u32 > expected as u32` a valid
/// "grew worse than declared" check in the [crate::runners].\
/// The ladder stops at "worse than O(n²)": an all-targets batch of linear scans is
/// already the costliest search this crate can produce, and it sits at O(n²).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchCostComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    WorseThanON2,
}
impl SearchCostComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1        => "Better than O(1) -- did the comparison counts shrink on a bigger sequence?",
            Self::O1                  => "O(1)",
            Self::BetweenO1AndOLogN   => "Worse than O(1) but better than O(log(n))",
            Self::OLogN               => "O(log(n))",
            Self::BetweenOLogNAndON   => "Worse than O(log(n)) but better than O(n)",
            Self::ON                  => "O(n)",
            Self::BetweenONAndONLogN  => "Worse than O(n) but better than O(n.log(n))",
            Self::ONLogN              => "O(n.log(n))",
            Self::BetweenONLogNAndON2 => "Worse than O(n.log(n)) but better than O(n²)",
            Self::ON2                 => "O(n²)",
            Self::WorseThanON2        => "Worse than O(n²) -- is there a hidden repetition bug?",
        }
    }
}
impl Display for SearchCostComplexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_pretty_str())
    }
}

/// Represents the pass information for the search cost complexity analysis: two passes
/// are run over sequences of different lengths and the growth of their comparison counts
/// is matched against the complexity curves.
#[derive(Debug, Clone, Copy)]
pub struct SearchPassesInfo {
    /// sequence length when running "pass 1"
    pub pass_1_sequence_len: u32,
    /// sequence length when running "pass 2"
    pub pass_2_sequence_len: u32,
    /// number of searches executed on "pass 1" -- 1 for single-target passes, the sequence length for batch passes
    pub pass_1_searches: u32,
    /// number of searches executed on "pass 2"
    pub pass_2_searches: u32,
}

/// represents the comparison counts accumulated on passes 1 & 2, so that the search cost may have its complexity analysed
#[derive(Debug, Clone, Copy)]
pub struct ComparisonMeasurements {
    /// element-to-target comparisons spent by all of pass 1's searches
    pub pass_1_comparisons: u64,
    /// element-to-target comparisons spent by all of pass 2's searches
    pub pass_2_comparisons: u64,
}

/// Contains the measurements for a verified search, so that its comparison cost may
/// have its complexity analysed & reported.
pub struct SearchCostMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub measurement_name:        &'a str,
    /// which of the search strategies produced the counts
    pub mode:                    SearchMode,
    /// each pass' info for use in the cost complexity analysis
    pub passes_info:             SearchPassesInfo,
    pub comparison_measurements: ComparisonMeasurements,
}
impl Display for SearchCostMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on implementers of Display
        let pass_1_comparisons = format!("{}", comparisons_measurement(self.comparison_measurements.pass_1_comparisons as f64));
        let pass_2_comparisons = format!("{}", comparisons_measurement(self.comparison_measurements.pass_2_comparisons as f64));
        let pass_1_average     = format!("{}", comparisons_per_search_measurement(self.comparison_measurements.pass_1_comparisons as f64 / self.passes_info.pass_1_searches as f64));
        let pass_2_average     = format!("{}", comparisons_per_search_measurement(self.comparison_measurements.pass_2_comparisons as f64 / self.passes_info.pass_2_searches as f64));
        write!(f, "'{}' {} search cost measurements:\n\
                   pass         Σcmp            Σn            ⊆s                cmp⁻\n\
                   1) {:>13}  {:>12}  {:>12}  {:>18}\n\
                   2) {:>13}  {:>12}  {:>12}  {:>18}\n",

               self.measurement_name, self.mode,

               pass_1_comparisons, self.passes_info.pass_1_sequence_len,
               self.passes_info.pass_1_searches, pass_1_average,

               pass_2_comparisons, self.passes_info.pass_2_sequence_len,
               self.passes_info.pass_2_searches, pass_2_average
        )
    }
}

/// Return result for this submodule's analysis: the observed cost complexity paired with
/// the measurements that led to it. See [comparison_analysis](super::comparison_analysis).
pub struct SearchCostAnalysis<'a> {
    pub cost_complexity:      SearchCostComplexity,
    pub search_measurements:  SearchCostMeasurements<'a>,
}
impl Display for SearchCostAnalysis<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}--> observed search cost complexity: {}\n",
               self.search_measurements,
               self.cost_complexity)
    }
}
