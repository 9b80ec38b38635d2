/// Handle of a node in the arena owned by one sort invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Value {
    /// Index into the element slice being sorted.
    Leaf(usize),
    /// A node of the level below.
    Group(NodeId),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    value: Value,
    // Element index of the representative leaf, cached at creation.
    key: usize,
    pair: Option<NodeId>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn leaf(&mut self, element: usize) -> NodeId {
        self.alloc(Node {
            value: Value::Leaf(element),
            key: element,
            pair: None,
        })
    }

    pub(crate) fn group(&mut self, child: NodeId) -> NodeId {
        let key = self.key(child);
        self.alloc(Node {
            value: Value::Group(child),
            key,
            pair: None,
        })
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> usize {
        self.nodes[id.0].key
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> Value {
        self.nodes[id.0].value
    }

    #[inline]
    pub(crate) fn has_pair(&self, id: NodeId) -> bool {
        self.nodes[id.0].pair.is_some()
    }

    pub(crate) fn link(&mut self, holder: NodeId, partner: NodeId) {
        debug_assert!(self.nodes[holder.0].pair.is_none());
        self.nodes[holder.0].pair = Some(partner);
    }

    /// Takes the pair link of `holder`, leaving it unpaired.
    #[inline]
    pub(crate) fn pop_pair(&mut self, holder: NodeId) -> Option<NodeId> {
        self.nodes[holder.0].pair.take()
    }

    /// Unwraps a node created by pairing into the node of the level below.
    pub(crate) fn child(&self, id: NodeId) -> NodeId {
        match self.value(id) {
            Value::Group(child) => child,
            Value::Leaf(_) => unreachable!("leaf {id:?} was never produced by pairing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_inherits_representative_key() {
        let mut arena = Arena::with_capacity(4);
        let leaf = arena.leaf(7);
        let group = arena.group(leaf);
        let outer = arena.group(group);

        assert_eq!(arena.value(leaf), Value::Leaf(7));
        assert_eq!(arena.value(group), Value::Group(leaf));
        assert_eq!(arena.key(group), 7);
        assert_eq!(arena.key(outer), 7);
        assert_eq!(arena.child(outer), group);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn pair_link_is_consumed_once() {
        let mut arena = Arena::default();
        let a = arena.leaf(0);
        let b = arena.leaf(1);
        let holder = arena.group(a);
        let partner = arena.group(b);

        arena.link(holder, partner);
        assert!(arena.has_pair(holder));
        assert!(!arena.has_pair(partner));
        assert_eq!(arena.pop_pair(holder), Some(partner));
        assert!(!arena.has_pair(holder));
        assert_eq!(arena.pop_pair(holder), None);
    }
}
