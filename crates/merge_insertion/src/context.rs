use crate::Result;
use crate::jacobsthal::Jacobsthal;

/// Per-run state threaded through every comparison: the comparison counter and
/// the Jacobsthal cache. Sorting resets the counter on entry.
#[derive(Clone, Debug, Default)]
pub struct MergeInsertContext {
    comparisons: u64,
    jacobsthal: Jacobsthal,
}

impl MergeInsertContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    #[inline]
    pub fn reset(&mut self) {
        self.comparisons = 0;
    }

    pub fn jacobsthal(&mut self, index: usize) -> Result<u64> {
        self.jacobsthal.get(index)
    }

    pub(crate) fn batch(&mut self, round: usize) -> Result<usize> {
        self.jacobsthal.batch(round)
    }

    #[inline]
    pub(crate) fn less<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a < b
    }
}
