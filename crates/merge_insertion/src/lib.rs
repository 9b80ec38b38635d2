mod context;
mod error;
mod harness;
mod linked_list;
mod merge_insert;
mod node;
mod sequence;

pub mod jacobsthal;

use log::debug;

pub use context::MergeInsertContext;
pub use error::{Error, Result};
pub use harness::{RepresentationReport, compare_representations};
pub use linked_list::{ArenaList, Iter};
pub use merge_insert::merge_insertion_sort;
pub use node::NodeId;
pub use sequence::Sequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Representation {
    Array,
    List,
}

pub const ALL_REPRESENTATIONS: [Representation; 2] = [Representation::Array, Representation::List];

pub fn all_representations() -> &'static [Representation] {
    &ALL_REPRESENTATIONS
}

pub fn representation_name(repr: Representation) -> &'static str {
    match repr {
        Representation::Array => "array",
        Representation::List => "list",
    }
}

pub fn sort<T: Ord>(repr: Representation, data: Vec<T>) -> Result<Vec<T>> {
    let mut ctx = MergeInsertContext::default();
    sort_with_ctx(repr, data, &mut ctx)
}

pub fn sort_with_ctx<T: Ord>(
    repr: Representation,
    data: Vec<T>,
    ctx: &mut MergeInsertContext,
) -> Result<Vec<T>> {
    let len = data.len();
    let sorted = match repr {
        Representation::Array => merge_insertion_sort::<Vec<NodeId>, T>(data, ctx)?,
        Representation::List => merge_insertion_sort::<ArenaList<NodeId>, T>(data, ctx)?,
    };
    debug!(
        "{} sort of {len} elements took {} comparisons",
        representation_name(repr),
        ctx.comparisons()
    );
    Ok(sorted)
}

/// Worst-case comparison count of merge-insertion for `n` elements:
/// the sum of `ceil(log2(3k / 4))` for `k = 1..=n`.
pub fn ford_johnson_bound(n: usize) -> u64 {
    (1..=n as u64)
        .map(|k| {
            let mut bits = 0_u64;
            while (4_u64 << bits) < 3 * k {
                bits += 1;
            }
            bits
        })
        .sum()
}
