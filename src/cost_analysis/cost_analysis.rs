//! See [super].

use crate::features::PERCENT_TOLERANCE;
use super::types::SearchCostComplexity;


/// Matches the growth of the comparison counts against the complexity curves, where `c1` & `c2`
/// are the counts accumulated on passes 1 & 2 and `n1` & `n2` are the sequence lengths each pass
/// searched through -- in other words, the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc.\
/// The cascade walks the curves from cheapest to costliest, accepting the first one whose growth
/// ratio matches the observed `c2/c1` within [PERCENT_TOLERANCE] -- landing on a "Between" variant
/// when the observation falls in the gap between two curves.
pub fn analyse_cost_complexity(c1: f64, c2: f64, n1: f64, n2: f64) -> SearchCostComplexity {
    if (c2 / c1) < 1.0 - PERCENT_TOLERANCE {
        SearchCostComplexity::BetterThanO1
    } else if ((c2 / c1) - 1.0).abs() <= PERCENT_TOLERANCE {
        SearchCostComplexity::O1
    } else if ((c2 / c1) / ( n2.log2() / n1.log2() )) < 1.0 - PERCENT_TOLERANCE {
        SearchCostComplexity::BetweenO1AndOLogN
    } else if ( ((c2 / c1) / ( n2.log2() / n1.log2() )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        SearchCostComplexity::OLogN
    } else if ((c2 / c1) / (n2 / n1)) < 1.0 - PERCENT_TOLERANCE {
        SearchCostComplexity::BetweenOLogNAndON
    } else if ( ((c2 / c1) / (n2 / n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        SearchCostComplexity::ON
    } else if ((c2 / c1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) < 1.0 - PERCENT_TOLERANCE {
        SearchCostComplexity::BetweenONAndONLogN
    } else if ( ((c2 / c1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        SearchCostComplexity::ONLogN
    } else if ((c2 / c1) / (n2 / n1).powi(2)) < 1.0 - PERCENT_TOLERANCE {
        SearchCostComplexity::BetweenONLogNAndON2
    } else if ( ((c2 / c1) / (n2 / n1).powi(2)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        SearchCostComplexity::ON2
    } else {
        SearchCostComplexity::WorseThanON2
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [cost_analysis](super) module -- the math is deterministic,
    //! so these are pure table checks on the cascade.

    use super::*;
    use serial_test::serial;

    /// test the cost complexity analysis progression as the pass-2 comparison count increases:
    /// walking `c2` upwards must climb the complexity ladder one variant at a time, never skipping
    /// and never going back
    #[test]
    #[serial]
    fn smooth_transitions() {
        let mut last_complexity = SearchCostComplexity::BetterThanO1;
        for c2 in 0..1_001 {
            let current_complexity = analyse_cost_complexity(10.0, c2 as f64, 2.0, 14.0);
            let delta = current_complexity as i32 - last_complexity as i32;
            assert!(delta == 0 || delta == 1, "'analyse_cost_complexity(..., {}, ..., ...)' suddenly went from {:?} to {:?} when `c2` went from {} to {}", c2, last_complexity, current_complexity, c2-1, c2);
            if delta == 1 {
                last_complexity = current_complexity;
                eprintln!("'analyse_cost_complexity(...)' transitioned to {:?} when `c2`={}", current_complexity, c2);
            }
        }
        assert_eq!(last_complexity, SearchCostComplexity::WorseThanON2, "Please update this test to cycle through all variants of `SearchCostComplexity`");
    }
}
