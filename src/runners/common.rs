//! Contains code shared between this module's submodules

use crate::counting_search::{
    search,
    types::{SearchMode, SearchResult},
};


/// wrap around the original [run_search_pass()] to output progress & intermediate results
pub fn run_search_pass_verbosely<Element:        Ord + Clone,
                                 _OutputClosure: FnMut(&str)>
                                (result_prefix: &str,
                                 result_suffix: &str,
                                 target:        &Element,
                                 sequence:      &[Element],
                                 mode:          SearchMode,
                                 mut output:    _OutputClosure)
                                -> PassResult {
    let pass_result = run_search_pass(target, sequence, mode);
    output(&format!("{}{}cmp over {} elements{}", result_prefix, pass_result.comparisons, sequence.len(), result_suffix));
    pass_result
}

/// wrap around the original [run_batch_pass()] to output progress & intermediate results
pub fn run_batch_pass_verbosely<Element:        Ord + Clone + Sync,
                                _OutputClosure: FnMut(&str)>
                               (result_prefix: &str,
                                result_suffix: &str,
                                sequence:      &[Element],
                                mode:          SearchMode,
                                threads:       u32,
                                mut output:    _OutputClosure)
                               -> PassResult {
    let pass_result = run_batch_pass(sequence, mode, threads);
    output(&format!("{}{}cmp over {} searches{}", result_prefix, pass_result.comparisons, pass_result.searches, result_suffix));
    pass_result
}


/// Runs a single search for `target` in `sequence`, returning the pass counts.\
/// See [run_batch_pass()] for passes that search for every element of the sequence.
pub(crate) fn run_search_pass<Element: Ord + Clone>(target:   &Element,
                                                    sequence: &[Element],
                                                    mode:     SearchMode)
                                                   -> PassResult {
    let SearchResult { outcome, comparisons } = search(target, sequence, mode);
    PassResult {
        comparisons: comparisons as u64,
        matches:     outcome.is_found() as u32,
        searches:    1,
    }
}

/// Runs one search per element of `sequence` -- each element acting as the target once --
/// summing the comparison counts of them all. The targets are chunked across `threads`
/// scoped threads: the searches share nothing but the read-only sequence, so the summed
/// counts are identical no matter how many threads (or which chunking) is used.\
/// See [run_search_pass()] for single-target passes.
pub(crate) fn run_batch_pass<Element: Ord + Clone + Sync>(sequence: &[Element],
                                                          mode:     SearchMode,
                                                          threads:  u32)
                                                         -> PassResult {

    if sequence.is_empty() {
        return PassResult::default();
    }
    let chunk_len = sequence.len().div_ceil(threads.max(1) as usize);

    // crossbeam's scoped threads avoid requiring a 'static lifetime for the sequence borrow
    crossbeam::scope(|scope| {

        // start all threads
        let mut thread_handlers = Vec::with_capacity(threads as usize);
        for targets in sequence.chunks(chunk_len) {
            thread_handlers.push( scope.spawn(move |_| {
                let mut comparisons = 0u64;
                let mut matches     = 0u32;
                for target in targets {
                    let search_result = search(target, sequence, mode);
                    comparisons += search_result.comparisons as u64;
                    matches     += search_result.outcome.is_found() as u32;
                }
                (comparisons, matches)
            }) );
        }

        // wait for them all to finish, summing the counts
        let mut pass_result = PassResult { searches: sequence.len() as u32, ..PassResult::default() };
        for handler in thread_handlers {
            let joining_result = handler.join();
            if joining_result.is_err() {
                panic!("Panic! while running a batch search pass: mode: {:?}, sequence len: {}: Error: {:?}", mode, sequence.len(), joining_result.unwrap_err())
            }
            let (thread_comparisons, thread_matches) = joining_result.unwrap();
            pass_result.comparisons += thread_comparisons;
            pass_result.matches     += thread_matches;
        }
        pass_result

    }).unwrap()
}

/// contains the counts accumulated by a pass done in [run_search_pass()] or [run_batch_pass()]
#[derive(Debug, Clone, Copy, Default)]
pub struct PassResult {
    /// element-to-target comparisons spent by every search in the pass
    pub comparisons: u64,
    /// how many of the pass' searches found their target
    pub matches:     u32,
    /// how many searches the pass ran
    pub searches:    u32,
}
