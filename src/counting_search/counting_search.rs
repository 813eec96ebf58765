//! Comparison-counting implementations of the classic searches.\
//! Pure, synchronous computations: the only observable effects are the returned
//! (outcome, comparison count) pairs -- safe to call concurrently from independent
//! threads, since the binary variant sorts a local copy and no external state is touched.

use super::types::*;
use std::cmp::Ordering;


/// Locates `target` in `sequence` using the given [SearchMode], returning the outcome
/// together with the exact number of element-to-target comparisons performed.\
/// The sequence may be empty, unsorted and contain duplicates -- none of those are errors.\
/// See [linear_search()] & [binary_search()] for the per-mode counting contracts.
pub fn search<Element: Ord + Clone>(target: &Element, sequence: &[Element], mode: SearchMode) -> SearchResult<Element> {
    match mode {
        SearchMode::Linear => linear_search(target, sequence),
        SearchMode::Binary => binary_search(target, sequence),
    }
}

/// Same as [search()], but resolving `mode_name` from the original string-typed contract
/// -- the single fallible entry point: mode names outside {`linear`, `binary`} yield
/// [InvalidSearchMode] carrying the rejected value.
pub fn search_with_mode_name<Element: Ord + Clone>(target:    &Element,
                                                   sequence:  &[Element],
                                                   mode_name: &str)
                                                  -> Result<SearchResult<Element>, InvalidSearchMode> {
    let mode = mode_name.parse::<SearchMode>()?;
    Ok(search(target, sequence, mode))
}

/// Scans `sequence` from the first element onward, counting one comparison per element
/// examined, in scan order.\
/// Returns the first element equal to `target` (later duplicates are never examined) or,
/// after examining all elements, "not found" with a count equal to the sequence length
/// -- 0 for an empty sequence.
pub fn linear_search<Element: Ord + Clone>(target: &Element, sequence: &[Element]) -> SearchResult<Element> {
    let mut comparisons = 0;
    for element in sequence {
        comparisons += 1;
        if element == target {
            return SearchResult { outcome: SearchOutcome::Found(element.clone()), comparisons };
        }
    }
    SearchResult { outcome: SearchOutcome::NotFound, comparisons }
}

/// Bisects an internally sorted (ascending) copy of `sequence`, counting one comparison
/// per probe -- a probe is a single three-way [Ord::cmp], matching how the counts are
/// documented throughout this crate.\
/// The classic two-pointer form is used: inclusive bounds `[low, high]` starting at
/// `[0, len-1]`, `mid = ⌊(low+high)/2⌋`; equal returns the probed element & the count so far,
/// less moves `low` past `mid`, greater moves `high` before it. The loop body never runs for
/// an empty sequence, so "not found" comes back with 0 comparisons there.\
/// The caller's sequence ordering is never touched; sorting a fresh copy on every call is
/// deliberate -- convenience over efficiency, and the documented comparison counts depend on it.
pub fn binary_search<Element: Ord + Clone>(target: &Element, sequence: &[Element]) -> SearchResult<Element> {
    let mut sorted_sequence = sequence.to_vec();
    sorted_sequence.sort();
    let mut comparisons = 0;
    let mut low:  isize = 0;
    let mut high: isize = sorted_sequence.len() as isize - 1;
    while low <= high {
        let mid = (low + high) / 2;     // both bounds are non-negative, so this is the floor
        comparisons += 1;
        match sorted_sequence[mid as usize].cmp(target) {
            Ordering::Equal   => return SearchResult { outcome: SearchOutcome::Found(sorted_sequence[mid as usize].clone()), comparisons },
            Ordering::Less    => low  = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    SearchResult { outcome: SearchOutcome::NotFound, comparisons }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [counting_search](super) module -- attesting the documented
    //! comparison counts on concrete sequences.

    use super::*;


    /// the (outcome, count) pairs both modes must produce on some hand-checked sequences
    #[test]
    fn documented_comparison_counts() {
        let assert = |target: i32, sequence: &[i32], mode, expected_outcome, expected_comparisons| {
            let observed = search(&target, sequence, mode);
            assert_eq!(observed.outcome,     expected_outcome,     "wrong outcome searching {} for {} in {:?}", mode, target, sequence);
            assert_eq!(observed.comparisons, expected_comparisons, "wrong comparison count searching {} for {} in {:?}", mode, target, sequence);
        };

        assert(5,  &[1,2,3,4,5,6,7], SearchMode::Linear, SearchOutcome::Found(5), 5);
        assert(10, &[1,2,3,4,5],     SearchMode::Linear, SearchOutcome::NotFound, 5);
        assert(5,  &[1,2,3,4,5,6,7], SearchMode::Binary, SearchOutcome::Found(5), 3);
        assert(10, &[1,2,3,4,5],     SearchMode::Binary, SearchOutcome::NotFound, 3);
        // unsorted input is accepted by the binary mode (it sorts a copy)
        assert(5,  &[7,3,1,5,2,4,6], SearchMode::Binary, SearchOutcome::Found(5), 3);
        // the first duplicate wins on linear searches & later ones are never examined
        assert(5,  &[1,5,2,5,3,5],   SearchMode::Linear, SearchOutcome::Found(5), 2);
    }

    /// single element sequences resolve with exactly 1 comparison on both modes
    #[test]
    fn single_element_sequences() {
        for mode in [SearchMode::Linear, SearchMode::Binary] {
            assert_eq!(search(&1, &[1], mode), SearchResult { outcome: SearchOutcome::Found(1), comparisons: 1 });
            assert_eq!(search(&2, &[1], mode), SearchResult { outcome: SearchOutcome::NotFound, comparisons: 1 });
        }
    }

    /// empty sequences are valid inputs, resolving to "not found" with 0 comparisons on both modes
    #[test]
    fn empty_sequences() {
        for mode in [SearchMode::Linear, SearchMode::Binary] {
            assert_eq!(search(&1, &[], mode), SearchResult { outcome: SearchOutcome::NotFound, comparisons: 0 });
        }
    }

    /// with 100 elements and the floor-mid bisection, 50 sits exactly on the first probe
    #[test]
    fn bisection_first_probe_hit() {
        let sequence: Vec<i32> = (1..=100).collect();
        assert_eq!(search(&50, &sequence, SearchMode::Binary),
                   SearchResult { outcome: SearchOutcome::Found(50), comparisons: 1 });
    }

    /// absent targets on either end of a 100 element sequence stay within the
    /// ⌈log₂(n+1)⌉ = 7 worst case bound for the bisection
    #[test]
    fn bisection_worst_case_bound() {
        let sequence: Vec<i32> = (1..=100).collect();
        let below = search(&0,   &sequence, SearchMode::Binary);
        let above = search(&101, &sequence, SearchMode::Binary);
        assert_eq!(below, SearchResult { outcome: SearchOutcome::NotFound, comparisons: 6 });
        assert_eq!(above, SearchResult { outcome: SearchOutcome::NotFound, comparisons: 7 });
        assert!(below.comparisons <= 7 && above.comparisons <= 7, "bisection exceeded its worst case bound");
    }

    /// linear searches report a count equal to the 1-based index of the first occurrence
    #[test]
    fn linear_count_is_first_occurrence_position() {
        let sequence = [9, 8, 7, 9, 8, 7];
        for (position, element) in sequence.iter().enumerate().take(3) {
            let observed = linear_search(element, &sequence);
            assert_eq!(observed.comparisons, position as u32 + 1, "count should be the 1-based position of {}", element);
        }
    }

    /// the searches are generic over any orderable element type, not just integers
    #[test]
    fn non_integer_elements() {
        let sequence = ["apple", "banana", "cherry"];
        assert_eq!(search(&"cherry", &sequence, SearchMode::Linear),
                   SearchResult { outcome: SearchOutcome::Found("cherry"), comparisons: 3 });
        assert_eq!(search(&"banana", &sequence, SearchMode::Binary),
                   SearchResult { outcome: SearchOutcome::Found("banana"), comparisons: 1 });
        assert_eq!(search(&"durian", &sequence, SearchMode::Linear).outcome, SearchOutcome::NotFound);
    }

    /// the binary mode sorts a copy -- the caller's ordering must come out untouched
    #[test]
    fn binary_mode_preserves_caller_ordering() {
        let sequence = vec![7, 3, 1, 5, 2, 4, 6];
        let original = sequence.clone();
        _ = binary_search(&5, &sequence);
        assert_eq!(sequence, original, "the caller's sequence ordering was mutated");
    }

    /// mode names outside {'linear', 'binary'} are the single error condition,
    /// carrying the rejected value for diagnostics
    #[test]
    fn invalid_mode_names() {
        let result = search_with_mode_name(&5, &[1,2,3,4,5], "interpolation");
        match result {
            Err(InvalidSearchMode { ref rejected }) => assert_eq!(rejected, "interpolation", "the rejected mode name wasn't carried through"),
            Ok(_) => panic!("an unsupported mode name was accepted"),
        }
        assert!(search_with_mode_name(&5, &[1,2,3,4,5], "linear").is_ok());
        assert!(search_with_mode_name(&5, &[1,2,3,4,5], "binary").is_ok());
    }

    /// identical inputs must reproduce identical counts -- determinism is what makes
    /// the counts usable as a test contract
    #[test]
    fn counts_are_deterministic() {
        let sequence: Vec<u32> = (0..997).rev().collect();
        for mode in [SearchMode::Linear, SearchMode::Binary] {
            let first = search(&499, &sequence, mode);
            for _ in 0..10 {
                assert_eq!(search(&499, &sequence, mode), first, "comparison counts wobbled between identical {} calls", mode);
            }
        }
    }
}
