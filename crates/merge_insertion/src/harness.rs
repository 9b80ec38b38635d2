use std::time::{Duration, Instant};

use log::debug;

use crate::{MergeInsertContext, Representation, Result, sort_with_ctx};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepresentationReport<T> {
    pub input: Vec<T>,
    pub array_result: Vec<T>,
    pub list_result: Vec<T>,
    pub array_comparisons: u64,
    pub list_comparisons: u64,
    pub array_micros: u128,
    pub list_micros: u128,
}

impl<T: PartialEq> RepresentationReport<T> {
    pub fn results_agree(&self) -> bool {
        self.array_result == self.list_result
    }
}

/// Sorts two fresh copies of `data`, array-backed first, and reports both
/// results with their comparison counts and wall-clock times. The copy is part
/// of each timed run.
pub fn compare_representations<T: Ord + Clone>(data: &[T]) -> Result<RepresentationReport<T>> {
    let mut ctx = MergeInsertContext::new();

    let (array_result, array_elapsed) = timed_run(Representation::Array, data, &mut ctx)?;
    let array_comparisons = ctx.comparisons();

    let (list_result, list_elapsed) = timed_run(Representation::List, data, &mut ctx)?;
    let list_comparisons = ctx.comparisons();

    debug!(
        "compared {} elements: array {array_comparisons} cmp in {array_elapsed:?}, \
         list {list_comparisons} cmp in {list_elapsed:?}",
        data.len()
    );

    Ok(RepresentationReport {
        input: data.to_vec(),
        array_result,
        list_result,
        array_comparisons,
        list_comparisons,
        array_micros: array_elapsed.as_micros(),
        list_micros: list_elapsed.as_micros(),
    })
}

fn timed_run<T: Ord + Clone>(
    repr: Representation,
    data: &[T],
    ctx: &mut MergeInsertContext,
) -> Result<(Vec<T>, Duration)> {
    let start = Instant::now();
    let sorted = sort_with_ctx(repr, data.to_vec(), ctx)?;
    Ok((sorted, start.elapsed()))
}
