/// Marks an absent index: a vacant arena slot (in `parent`) or a node
/// without children (in `child`).
pub(crate) const NIL: usize = usize::MAX;

/// The per-node bookkeeping of the forest.
///
/// Nodes are arena slots addressed by index. Besides the classic
/// parent/rank pair, every node is threaded through up to three circular
/// doubly linked lists:
///
/// - `c_prev`/`c_next` link the node into its parent's children list;
///   `child` points at the node's own first child.
/// - `dfs_prev`/`dfs_next` link all nodes of a tree in depth-first
///   traversal order, the root first.
/// - `nl_prev`/`nl_next` form the tree's list of interior nodes. The root
///   takes part as the anchor of this list, never as a member.
///
/// A node outside one of these lists keeps the respective links pointing at
/// itself, so splicing never needs a separate "unlinked" marker.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// The parent of the node in its set's tree, or the node itself for a
    /// root. `NIL` marks a vacant slot; the free list is then threaded
    /// through `dfs_next`.
    pub(crate) parent: usize,
    /// An upper bound on the height of the node's subtree.
    pub(crate) rank: usize,
    /// The first child, `NIL` for a leaf.
    pub(crate) child: usize,
    pub(crate) c_prev: usize,
    pub(crate) c_next: usize,
    pub(crate) dfs_prev: usize,
    pub(crate) dfs_next: usize,
    pub(crate) nl_prev: usize,
    pub(crate) nl_next: usize,
}

impl Node {
    /// A fresh singleton: its own root, rank 0, alone in its traversal
    /// list, without children or interior nodes.
    pub(crate) fn solo(index: usize) -> Self {
        Self {
            parent: index,
            rank: 0,
            child: NIL,
            c_prev: index,
            c_next: index,
            dfs_prev: index,
            dfs_next: index,
            nl_prev: index,
            nl_next: index,
        }
    }
}
