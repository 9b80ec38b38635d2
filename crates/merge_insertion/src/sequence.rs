use crate::node::NodeId;

/// The container operations merge-insertion needs. Positions behave like
/// bidirectional iterators: `end` is one past the last node, and inserting
/// before a position keeps positions after it meaningful for a backward scan.
pub trait Sequence: Sized {
    type Pos: Copy + Eq;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn begin(&self) -> Self::Pos;
    fn end(&self) -> Self::Pos;
    fn next(&self, pos: Self::Pos) -> Self::Pos;
    fn prev(&self, pos: Self::Pos) -> Self::Pos;
    fn get(&self, pos: Self::Pos) -> NodeId;

    fn push_back(&mut self, id: NodeId);
    fn insert_before(&mut self, pos: Self::Pos, id: NodeId);

    fn back(&self) -> Option<NodeId> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.prev(self.end())))
        }
    }

    fn advance(&self, mut pos: Self::Pos, steps: usize) -> Self::Pos {
        for _ in 0..steps {
            pos = self.next(pos);
        }
        pos
    }

    fn distance(&self, mut first: Self::Pos, last: Self::Pos) -> usize {
        let mut steps = 0;
        while first != last {
            first = self.next(first);
            steps += 1;
        }
        steps
    }

    fn to_vec(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let end = self.end();
        let mut pos = self.begin();
        while pos != end {
            out.push(self.get(pos));
            pos = self.next(pos);
        }
        out
    }
}

impl Sequence for Vec<NodeId> {
    type Pos = usize;

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }

    #[inline]
    fn get(&self, pos: usize) -> NodeId {
        self[pos]
    }

    fn push_back(&mut self, id: NodeId) {
        self.push(id);
    }

    fn insert_before(&mut self, pos: usize, id: NodeId) {
        self.insert(pos, id);
    }

    #[inline]
    fn advance(&self, pos: usize, steps: usize) -> usize {
        pos + steps
    }

    #[inline]
    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }

    fn to_vec(&self) -> Vec<NodeId> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked_list::ArenaList;
    use crate::node::Arena;

    fn ids(arena: &mut Arena, n: usize) -> Vec<NodeId> {
        (0..n).map(|i| arena.leaf(i)).collect()
    }

    fn exercise<S: Sequence>() {
        let mut arena = Arena::default();
        let nodes = ids(&mut arena, 5);

        let mut seq = S::with_capacity(5);
        assert!(seq.is_empty());
        assert_eq!(seq.back(), None);

        seq.push_back(nodes[1]);
        seq.push_back(nodes[3]);
        seq.insert_before(seq.begin(), nodes[0]);
        let last = seq.prev(seq.end());
        seq.insert_before(last, nodes[2]);
        seq.insert_before(seq.end(), nodes[4]);

        assert_eq!(seq.to_vec(), nodes);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.back(), Some(nodes[4]));
        assert_eq!(seq.distance(seq.begin(), seq.end()), 5);

        let third = seq.advance(seq.begin(), 2);
        assert_eq!(seq.get(third), nodes[2]);
        assert_eq!(seq.distance(third, seq.end()), 3);
        assert_eq!(seq.get(seq.prev(third)), nodes[1]);
    }

    #[test]
    fn vec_sequence_contract() {
        exercise::<Vec<NodeId>>();
    }

    #[test]
    fn list_sequence_contract() {
        exercise::<ArenaList<NodeId>>();
    }
}
