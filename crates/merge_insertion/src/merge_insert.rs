use log::trace;

use crate::Result;
use crate::context::MergeInsertContext;
use crate::node::{Arena, NodeId, Value};
use crate::sequence::Sequence;

/// Sorts `data` with merge-insertion, using `S` for every working sequence.
/// Resets the comparison counter of `ctx` first.
pub fn merge_insertion_sort<S: Sequence, T: Ord>(
    mut data: Vec<T>,
    ctx: &mut MergeInsertContext,
) -> Result<Vec<T>> {
    ctx.reset();
    if data.len() < 2 {
        return Ok(data);
    }

    let order = {
        let mut sorter = MergeInsert::new(&data, ctx);
        let leaves = sorter.leaves::<S>();
        let sorted = sorter.sort_level(leaves)?;
        trace!("{} nodes built for {} elements", sorter.arena.len(), data.len());
        sorter.element_order(&sorted)
    };
    apply_order(&mut data, &order);
    Ok(data)
}

struct MergeInsert<'a, T> {
    elements: &'a [T],
    arena: Arena,
    ctx: &'a mut MergeInsertContext,
}

impl<'a, T: Ord> MergeInsert<'a, T> {
    fn new(elements: &'a [T], ctx: &'a mut MergeInsertContext) -> Self {
        // Leaves plus one wrapper per item on every level: n + n + n/2 + ...
        let capacity = elements.len().saturating_mul(3);
        Self {
            elements,
            arena: Arena::with_capacity(capacity),
            ctx,
        }
    }

    fn leaves<S: Sequence>(&mut self) -> S {
        let mut leaves = S::with_capacity(self.elements.len());
        for index in 0..self.elements.len() {
            leaves.push_back(self.arena.leaf(index));
        }
        leaves
    }

    #[inline]
    fn less(&mut self, a: NodeId, b: NodeId) -> bool {
        let a = &self.elements[self.arena.key(a)];
        let b = &self.elements[self.arena.key(b)];
        self.ctx.less(a, b)
    }

    fn sort_level<S: Sequence>(&mut self, items: S) -> Result<S> {
        let len = items.len();
        if len < 2 {
            return Ok(items);
        }

        let (large, small) = self.pair_up(&items);
        let large = self.sort_level(large)?;
        let merged = self.merge_pending(&large, &small, len)?;
        Ok(self.dissolve(&merged))
    }

    /// Splits `items` into `large` holders linked to their `small` partners.
    /// An odd trailing item lands unpaired at the back of `small`.
    fn pair_up<S: Sequence>(&mut self, items: &S) -> (S, S) {
        let len = items.len();
        let mut large = S::with_capacity(len / 2);
        let mut small = S::with_capacity(len / 2 + len % 2);

        let end = items.end();
        let mut pos = items.begin();
        while pos != end {
            let first = items.get(pos);
            pos = items.next(pos);
            if pos == end {
                small.push_back(self.arena.group(first));
                break;
            }
            let second = items.get(pos);
            pos = items.next(pos);

            let (hi, lo) = if self.less(first, second) {
                (second, first)
            } else {
                (first, second)
            };
            let holder = self.arena.group(hi);
            let partner = self.arena.group(lo);
            self.arena.link(holder, partner);
            large.push_back(holder);
            small.push_back(partner);
        }

        (large, small)
    }

    /// Rebuilds the full level from the sorted holders, reinserting partners
    /// in batches of `2 J(round)`.
    fn merge_pending<S: Sequence>(&mut self, large: &S, small: &S, len: usize) -> Result<S> {
        let mut merged = S::with_capacity(len);
        let straggler = if len % 2 == 1 { small.back() } else { None };

        let end = large.end();
        let mut cursor = large.begin();
        let first = large.get(cursor);
        if let Some(partner) = self.arena.pop_pair(first) {
            merged.push_back(partner);
        }
        merged.push_back(first);
        cursor = large.next(cursor);

        let mut finished = false;
        let mut round = 1;
        while !finished {
            let batch = self.ctx.batch(round)?;
            let mut pulled = 0;
            while pulled < batch {
                if cursor == end {
                    if let Some(straggler) = straggler {
                        let (head, tail) = (merged.begin(), merged.end());
                        let pos = self.lower_bound(&merged, head, tail, straggler);
                        merged.insert_before(pos, straggler);
                    }
                    finished = true;
                    break;
                }
                merged.push_back(large.get(cursor));
                cursor = large.next(cursor);
                pulled += 1;
            }

            trace!(
                "round {round}: batch={batch} pulled={pulled} merged_len={}",
                merged.len()
            );
            self.insert_partners(&mut merged);
            round += 1;
        }

        debug_assert_eq!(merged.len(), len);
        Ok(merged)
    }

    /// Scans `merged` from the back and inserts every pending partner in front
    /// of its holder, searching only the prefix before the holder.
    fn insert_partners<S: Sequence>(&mut self, merged: &mut S) {
        let mut cursor = merged.end();
        while cursor != merged.begin() {
            let holder_pos = merged.prev(cursor);
            let holder = merged.get(holder_pos);
            match self.arena.pop_pair(holder) {
                Some(partner) => {
                    let pos = self.lower_bound(merged, merged.begin(), holder_pos, partner);
                    // `cursor` still follows the holder, so the next look is at
                    // whatever now precedes it.
                    merged.insert_before(pos, partner);
                }
                None => cursor = holder_pos,
            }
        }
    }

    /// First position in `[first, last)` whose node is not less than `probe`.
    fn lower_bound<S: Sequence>(
        &mut self,
        seq: &S,
        first: S::Pos,
        last: S::Pos,
        probe: NodeId,
    ) -> S::Pos {
        let mut first = first;
        let mut len = seq.distance(first, last);
        while len > 0 {
            let half = len / 2;
            let mid = seq.advance(first, half);
            if self.less(seq.get(mid), probe) {
                first = seq.next(mid);
                len -= half + 1;
            } else {
                len = half;
            }
        }
        first
    }

    fn dissolve<S: Sequence>(&self, merged: &S) -> S {
        let mut out = S::with_capacity(merged.len());
        let end = merged.end();
        let mut pos = merged.begin();
        while pos != end {
            let id = merged.get(pos);
            debug_assert!(!self.arena.has_pair(id));
            out.push_back(self.arena.child(id));
            pos = merged.next(pos);
        }
        out
    }

    fn element_order<S: Sequence>(&self, sorted: &S) -> Vec<usize> {
        sorted
            .to_vec()
            .into_iter()
            .map(|id| {
                let key = self.arena.key(id);
                debug_assert!(matches!(self.arena.value(id), Value::Leaf(element) if element == key));
                key
            })
            .collect()
    }
}

/// Moves `data[order[k]]` to position `k` by following permutation cycles.
fn apply_order<T>(data: &mut [T], order: &[usize]) {
    debug_assert_eq!(data.len(), order.len());
    let mut dest = vec![0; order.len()];
    for (target, &source) in order.iter().enumerate() {
        dest[source] = target;
    }
    for i in 0..data.len() {
        while dest[i] != i {
            let j = dest[i];
            data.swap(i, j);
            dest.swap(i, j);
        }
    }
}
