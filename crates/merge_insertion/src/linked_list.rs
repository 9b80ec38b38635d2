use crate::node::NodeId;
use crate::sequence::Sequence;

const NIL: usize = usize::MAX;

#[derive(Clone, Debug)]
struct Slot<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// Doubly-linked list whose nodes live in one `Vec`. Positions are slot
/// indices and stay valid across insertions; `NIL` is the end position.
#[derive(Clone, Debug)]
pub struct ArenaList<T> {
    slots: Vec<Slot<T>>,
    head: usize,
    tail: usize,
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> ArenaList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn first_pos(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn end_pos(&self) -> usize {
        NIL
    }

    #[inline]
    pub fn next_pos(&self, pos: usize) -> usize {
        self.slots[pos].next
    }

    #[inline]
    pub fn prev_pos(&self, pos: usize) -> usize {
        if pos == NIL {
            self.tail
        } else {
            self.slots[pos].prev
        }
    }

    #[inline]
    pub fn value(&self, pos: usize) -> &T {
        &self.slots[pos].value
    }

    pub fn push_back(&mut self, value: T) -> usize {
        self.insert_before(NIL, value)
    }

    pub fn push_front(&mut self, value: T) -> usize {
        self.insert_before(self.head, value)
    }

    /// Links `value` in front of `pos` (or at the back for the end position)
    /// and returns its position.
    pub fn insert_before(&mut self, pos: usize, value: T) -> usize {
        let slot = self.slots.len();
        let prev = self.prev_pos(pos);
        self.slots.push(Slot {
            value,
            prev,
            next: pos,
        });

        if prev == NIL {
            self.head = slot;
        } else {
            self.slots[prev].next = slot;
        }
        if pos == NIL {
            self.tail = slot;
        } else {
            self.slots[pos].prev = slot;
        }
        slot
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> FromIterator<T> for ArenaList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.front];
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.back];
        self.back = slot.prev;
        self.remaining -= 1;
        Some(&slot.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArenaList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Sequence for ArenaList<NodeId> {
    type Pos = usize;

    fn with_capacity(capacity: usize) -> Self {
        ArenaList::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        ArenaList::len(self)
    }

    #[inline]
    fn begin(&self) -> usize {
        self.head
    }

    #[inline]
    fn end(&self) -> usize {
        NIL
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        self.next_pos(pos)
    }

    #[inline]
    fn prev(&self, pos: usize) -> usize {
        self.prev_pos(pos)
    }

    #[inline]
    fn get(&self, pos: usize) -> NodeId {
        *self.value(pos)
    }

    fn push_back(&mut self, id: NodeId) {
        ArenaList::push_back(self, id);
    }

    fn insert_before(&mut self, pos: usize, id: NodeId) {
        ArenaList::insert_before(self, pos, id);
    }

    fn to_vec(&self) -> Vec<NodeId> {
        self.iter().copied().collect()
    }
}
