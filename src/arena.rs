use crate::range::IndexRange;

/// Stable handle to a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Split data of an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Global entry index of the median pivot.
    pub split: usize,
    /// Axis the node was partitioned on.
    pub axis: usize,
    pub lower: NodeId,
    pub upper: NodeId,
}

/// A node of the tree. A node without a [`Branch`] is a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionNode {
    range: IndexRange,
    branch: Option<Branch>,
}

impl PartitionNode {
    pub fn new(range: IndexRange) -> Self {
        PartitionNode { range, branch: None }
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    pub fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn split(&self) -> Option<usize> {
        self.branch.map(|b| b.split)
    }

    pub fn lower(&self) -> Option<NodeId> {
        self.branch.map(|b| b.lower)
    }

    pub fn upper(&self) -> Option<NodeId> {
        self.branch.map(|b| b.upper)
    }

    pub fn is_leaf(&self) -> bool {
        self.branch.is_none()
    }
}

/// Fixed-capacity node store.
///
/// The capacity is chosen once; appending past it panics instead of growing, so every
/// [`NodeId`] handed out stays valid until the arena is dropped.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<PartitionNode>,
    capacity: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity <= u32::MAX as usize, "node arena capacity {capacity} exceeds handle range");
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Upper bound on the number of nodes needed for `entries` entries at a leaf threshold of 2:
    /// `max(1, min(P - 1, 2n - P/2 - 1))` where `P` is the next power of two `>= n`.
    /// Larger thresholds only produce fewer nodes.
    pub fn capacity_for(entries: usize) -> usize {
        let p = entries.max(1).next_power_of_two();
        let complete = p - 1;
        let partial = (2 * entries).saturating_sub(p / 2 + 1);
        complete.min(partial).max(1)
    }

    pub fn append(&mut self, range: IndexRange) -> NodeId {
        assert!(
            self.nodes.len() < self.capacity,
            "node arena overflow: capacity {} exhausted",
            self.capacity
        );
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(PartitionNode::new(range));
        id
    }

    /// Turns the leaf `id` into an internal node.
    pub fn set_branch(&mut self, id: NodeId, branch: Branch) {
        debug_assert!(branch.lower.index() < self.nodes.len() && branch.upper.index() < self.nodes.len());
        let node = &mut self.nodes[id.index()];
        debug_assert!(node.branch.is_none(), "node {id:?} already split");
        node.branch = Some(branch);
    }

    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(NodeId(0)) }
    }

    pub fn get(&self, id: NodeId) -> &PartitionNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &PartitionNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }
}
