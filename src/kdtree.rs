use crate::arena::{Branch, NodeArena, NodeId, PartitionNode};
use crate::bounds::BoundingBox;
use crate::config::KdConfig;
use crate::permutation::PermutationArray;
use crate::policy::{BoundPolicy, Coordinate, PointPolicy};
use crate::range::IndexRange;
#[allow(unused_imports)]
use crate::tracing_helpers::{debug_log, trace_log};
use std::fmt;

/// A median-split KD-tree over a slice of entries.
///
/// The tree is built completely by the constructor and is immutable afterwards. It is
/// generic over its entry storage `S`: pass `&[T]` to index entries owned elsewhere (the
/// borrow keeps them alive and unchanged for the tree's lifetime), or a `Vec<T>` to let
/// the tree own them.
///
/// When there are fewer entries than the leaf threshold no tree is built at all and
/// [`root`](Self::root) returns `None`; callers are expected to scan the entries linearly
/// in that case.
pub struct KdTree<S, P: BoundPolicy> {
    entries: S,
    policy: P,
    max_leaf_entries: usize,
    nodes: NodeArena,
    permutation: PermutationArray,
    bounds: Option<(P::Entry, P::Entry)>,
    leaf_count: usize,
    depth: usize,
}

#[derive(Clone, Copy)]
struct StackEntry {
    node: NodeId,
    axis: usize,
    depth: usize,
}

impl StackEntry {
    fn child(&self, node: NodeId, dim: usize) -> StackEntry {
        StackEntry {
            node,
            axis: (self.axis + 1) % dim,
            depth: self.depth + 1,
        }
    }
}

struct Built<T> {
    nodes: NodeArena,
    permutation: PermutationArray,
    bounds: Option<(T, T)>,
    leaf_count: usize,
    depth: usize,
}

impl<T> Built<T> {
    fn empty() -> Self {
        Built {
            nodes: NodeArena::new(),
            permutation: PermutationArray::default(),
            bounds: None,
            leaf_count: 0,
            depth: 0,
        }
    }
}

impl<S, P> KdTree<S, P>
where
    P: BoundPolicy,
    S: AsRef<[P::Entry]>,
{
    /// Builds a tree with the default leaf threshold of 2.
    pub fn new(entries: S, policy: P) -> Self {
        Self::with_config(entries, policy, KdConfig::default())
    }

    pub fn with_config(entries: S, policy: P, config: KdConfig) -> Self {
        let max_leaf_entries = config.effective_leaf_entries();
        let built = build(entries.as_ref(), &policy, max_leaf_entries);
        KdTree {
            entries,
            policy,
            max_leaf_entries,
            nodes: built.nodes,
            permutation: built.permutation,
            bounds: built.bounds,
            leaf_count: built.leaf_count,
            depth: built.depth,
        }
    }

    pub fn root(&self) -> Option<NodeRef<'_, P::Entry>> {
        self.nodes.root().map(|id| self.node(id))
    }

    /// Resolves a handle obtained from this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, P::Entry> {
        NodeRef {
            id,
            node: self.nodes.get(id),
            tree: self.view(),
        }
    }

    /// Elementwise minimum over all entries, `None` when no tree was built.
    pub fn min(&self) -> Option<&P::Entry> {
        self.bounds.as_ref().map(|(min, _)| min)
    }

    /// Elementwise maximum over all entries, `None` when no tree was built.
    pub fn max(&self) -> Option<&P::Entry> {
        self.bounds.as_ref().map(|(_, max)| max)
    }

    pub fn bounds(&self) -> Option<(&P::Entry, &P::Entry)> {
        self.bounds.as_ref().map(|(min, max)| (min, max))
    }

    pub fn entries(&self) -> &[P::Entry] {
        self.entries.as_ref()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.as_ref().len()
    }

    /// `true` when there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `false` when construction was skipped because of too few entries; scan
    /// [`entries`](Self::entries) linearly in that case.
    pub fn is_built(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// The clamped leaf threshold the tree was built with.
    pub fn max_leaf_entries(&self) -> usize {
        self.max_leaf_entries
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of levels, counting the root as 1. Zero for an unbuilt tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Entry indices in their final partitioned order. Empty for an unbuilt tree.
    pub fn permutation(&self) -> &[usize] {
        self.permutation.as_slice()
    }

    /// All nodes in allocation order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeRef<'_, P::Entry>> + '_ {
        let view = self.view();
        self.nodes.iter().map(move |(id, node)| NodeRef { id, node, tree: view })
    }

    /// Leaves in depth-first order, lower before upper.
    pub fn leaves(&self) -> Leaves<'_, P::Entry> {
        Leaves {
            stack: self.root().into_iter().collect(),
        }
    }

    fn view(&self) -> TreeView<'_, P::Entry> {
        TreeView {
            nodes: &self.nodes,
            permutation: self.permutation.as_slice(),
            entries: self.entries.as_ref(),
        }
    }
}

impl<'a, C: Coordinate, const D: usize> KdTree<&'a [[C; D]], PointPolicy<C, D>> {
    /// Indexes coordinate arrays owned by the caller.
    pub fn from_points(points: &'a [[C; D]], config: KdConfig) -> Self {
        Self::with_config(points, PointPolicy::new(), config)
    }
}

impl<C: Coordinate, const D: usize> KdTree<Vec<[C; D]>, PointPolicy<C, D>> {
    /// Indexes arbitrary items by a key extracted from each of them.
    ///
    /// The tree owns the extracted keys; entry `i` of the tree is the key of `items[i]`.
    pub fn from_keys<U, F>(items: &[U], key: F, config: KdConfig) -> Self
    where
        F: Fn(&U) -> [C; D],
    {
        let keys = items.iter().map(key).collect::<Vec<_>>();
        Self::with_config(keys, PointPolicy::new(), config)
    }
}

impl<S, const D: usize> KdTree<S, PointPolicy<f64, D>>
where
    S: AsRef<[[f64; D]]>,
{
    pub fn bounding_box(&self) -> Option<BoundingBox<D>> {
        self.bounds().map(|(min, max)| BoundingBox::new(*min, *max))
    }
}

impl<S, P> fmt::Debug for KdTree<S, P>
where
    P: BoundPolicy,
    S: AsRef<[P::Entry]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dim", &P::DIM)
            .field("entries", &self.len())
            .field("max_leaf_entries", &self.max_leaf_entries)
            .field("nodes", &self.nodes.len())
            .field("leaves", &self.leaf_count)
            .field("depth", &self.depth)
            .finish()
    }
}

fn build<P: BoundPolicy>(entries: &[P::Entry], policy: &P, max_leaf_entries: usize) -> Built<P::Entry> {
    assert!(P::DIM > 0, "dimension must be at least 1");

    let count = entries.len();
    if count < max_leaf_entries {
        trace_log!(count = count, max_leaf_entries = max_leaf_entries, "too few entries, tree left empty");
        return Built::empty();
    }

    let mut nodes = NodeArena::with_capacity(NodeArena::capacity_for(count));
    let mut permutation = PermutationArray::identity(count);
    let mut bounds: Option<(P::Entry, P::Entry)> = None;
    let mut leaf_count = 0;
    let mut depth = 0;

    debug_log!(count = count, max_leaf_entries = max_leaf_entries, capacity = nodes.capacity(), dim = P::DIM, "building kd-tree");

    let root = nodes.append(IndexRange::full(count));
    let mut stack = Vec::with_capacity(64);
    stack.push(StackEntry { node: root, axis: 0, depth: 1 });

    while let Some(entry) = stack.pop() {
        let range = nodes.get(entry.node).range();
        depth = depth.max(entry.depth);

        if range.size() <= max_leaf_entries {
            if let Some((lo, hi)) = leaf_bounds(entries, policy, permutation.slice(range)) {
                bounds = Some(match bounds {
                    Some((min, max)) => (policy.min(&min, &lo), policy.max(&max, &hi)),
                    None => (lo, hi),
                });
            }
            leaf_count += 1;
            continue;
        }

        let split = permutation.select_median(range, |a, b| policy.compare(&entries[a], &entries[b], entry.axis));

        let lower = nodes.append(range.lower());
        let upper = nodes.append(range.upper());
        nodes.set_branch(entry.node, Branch { split, axis: entry.axis, lower, upper });

        stack.push(entry.child(lower, P::DIM));
        stack.push(entry.child(upper, P::DIM));
    }

    debug_log!(nodes = nodes.len(), leaves = leaf_count, depth = depth, "kd-tree built");

    Built {
        nodes,
        permutation,
        bounds,
        leaf_count,
        depth,
    }
}

/// Bound of a leaf by a single pass over its entries.
fn leaf_bounds<P: BoundPolicy>(entries: &[P::Entry], policy: &P, slots: &[usize]) -> Option<(P::Entry, P::Entry)> {
    let (&first, rest) = slots.split_first()?;
    let mut min = entries[first].clone();
    let mut max = entries[first].clone();
    for &i in rest {
        min = policy.min(&min, &entries[i]);
        max = policy.max(&max, &entries[i]);
    }
    Some((min, max))
}

struct TreeView<'t, T> {
    nodes: &'t NodeArena,
    permutation: &'t [usize],
    entries: &'t [T],
}

impl<T> Clone for TreeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeView<'_, T> {}

/// Borrowed view of a single node, able to walk to its children.
pub struct NodeRef<'t, T> {
    id: NodeId,
    node: &'t PartitionNode,
    tree: TreeView<'t, T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'t, T> NodeRef<'t, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn range(&self) -> IndexRange {
        self.node.range()
    }

    /// Entry index of the median this node was split at, `None` for leaves.
    pub fn split(&self) -> Option<usize> {
        self.node.split()
    }

    pub fn split_entry(&self) -> Option<&'t T> {
        let entries = self.tree.entries;
        self.node.split().map(|i| &entries[i])
    }

    /// Axis this node was split on, `None` for leaves.
    pub fn axis(&self) -> Option<usize> {
        self.node.branch().map(|b| b.axis)
    }

    pub fn lower(&self) -> Option<NodeRef<'t, T>> {
        self.node.lower().map(|id| self.resolve(id))
    }

    pub fn upper(&self) -> Option<NodeRef<'t, T>> {
        self.node.upper().map(|id| self.resolve(id))
    }

    pub fn children(&self) -> Option<(NodeRef<'t, T>, NodeRef<'t, T>)> {
        self.node.branch().map(|b| (self.resolve(b.lower), self.resolve(b.upper)))
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Entry indices of every entry in this subtree.
    pub fn indices(&self) -> &'t [usize] {
        &self.tree.permutation[self.range().as_range()]
    }

    /// `(index, entry)` pairs of every entry in this subtree.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (usize, &'t T)> + 't {
        let entries = self.tree.entries;
        self.indices().iter().map(move |&i| (i, &entries[i]))
    }

    fn resolve(&self, id: NodeId) -> NodeRef<'t, T> {
        NodeRef {
            id,
            node: self.tree.nodes.get(id),
            tree: self.tree,
        }
    }
}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("range", &self.range())
            .field("split", &self.split())
            .field("axis", &self.axis())
            .finish()
    }
}

/// Iterator over the leaves of a tree, see [`KdTree::leaves`].
pub struct Leaves<'t, T> {
    stack: Vec<NodeRef<'t, T>>,
}

impl<'t, T> Iterator for Leaves<'t, T> {
    type Item = NodeRef<'t, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.children() {
                Some((lower, upper)) => {
                    self.stack.push(upper);
                    self.stack.push(lower);
                }
                None => return Some(node),
            }
        }
        None
    }
}
