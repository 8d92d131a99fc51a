//! The index-based core of the [disjoint-sets/union-find] forest with
//! deletion.
//!
//! See [`Forest`] for more information. Most callers will prefer the keyed
//! facade [`UfdMap<K>`] which maps arbitrary hashable elements onto the
//! indices used here.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Forest`]: struct.Forest.html
//! [`UfdMap<K>`]: ../ufd_map/struct.UfdMap.html

use crate::node::{Node, NIL};

/// A tree with at most this many nodes is merged by flat relinking instead
/// of structural linking.
const SMALL_UNION_MAX: usize = 4;
/// A tree with at most this many nodes is rebuilt from scratch on delete.
const SMALL_DELETE_MAX: usize = 5;

/// A forest of union-find trees over arena-allocated nodes, supporting
/// deletion of arbitrary nodes.
///
/// Nodes are addressed by the `usize` handles returned from [`make_set`];
/// freed slots are reused by later insertions. Every tree maintains, next
/// to the usual parent pointers and ranks, a children list per node, a
/// depth-first traversal list over the whole tree and a list of the tree's
/// interior nodes. These lists are what make [`delete`] possible in
/// amortized `O(log n)` time: the node to remove is always reduced to a
/// leaf, unlinked locally, and a bounded number of nearby nodes is relinked
/// to keep the tree shallow.
///
/// # Examples
///
/// ```
/// let mut forest = ufd::Forest::new();
///
/// let a = forest.make_set();
/// let b = forest.make_set();
/// let c = forest.make_set();
///
/// forest.union(a, b);
/// assert!(forest.same_set(a, b));
/// assert!(!forest.same_set(a, c));
///
/// forest.delete(b);
/// assert!(!forest.contains(b));
/// assert!(forest.contains(a));
/// ```
///
/// [`make_set`]: #method.make_set
/// [`delete`]: #method.delete
#[derive(Clone, Debug)]
pub struct Forest {
    nodes: Vec<Node>,
    /// Head of the free list threaded through the `dfs_next` field of
    /// vacant slots, `NIL` when every slot is live.
    first_free: usize,
    live: usize,
}

/// The outcome of [`Forest::delete`].
///
/// [`Forest::delete`]: struct.Forest.html#method.delete
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Removal {
    /// The node itself was unlinked and its slot freed.
    Unlinked,
    /// The node was interior to its tree, so the occupant of the leaf slot
    /// `leaf` was moved into the deleted node's slot and `leaf` was freed
    /// instead. Callers that associate data with node handles must carry
    /// the association of `leaf` over to the deleted node's index.
    Relocated {
        /// The leaf slot that was physically unlinked and freed.
        leaf: usize,
    },
}

impl Forest {
    /// Constructs a new, empty `Forest`.
    ///
    /// The forest will not allocate until nodes are created.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first_free: NIL,
            live: 0,
        }
    }

    /// Constructs a new, empty `Forest` with the specified capacity.
    ///
    /// The forest will be able to hold `capacity` nodes without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            first_free: NIL,
            live: 0,
        }
    }

    /// Returns the amount of live nodes in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the forest contains no live nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns `true` if `index` addresses a live node.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.nodes.len() && self.nodes[index].parent != NIL
    }

    /// Reserves capacity for at least `additional` more nodes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Removes all nodes from the forest.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first_free = NIL;
        self.live = 0;
    }

    /// Creates a new singleton set and returns the index of its node.
    ///
    /// Slots freed by earlier `delete` calls are reused before the arena
    /// grows.
    pub fn make_set(&mut self) -> usize {
        self.live += 1;

        if self.first_free == NIL {
            let index = self.nodes.len();
            self.nodes.push(Node::solo(index));
            index
        } else {
            let index = self.first_free;
            self.first_free = self.nodes[index].dfs_next;
            self.nodes[index] = Node::solo(index);
            index
        }
    }

    /// Gives the root of the tree that `index` belongs to.
    ///
    /// On the way to the root every visited node with a grandparent is
    /// relinked one level up. This is the deletion-friendly counterpart of
    /// path compression: the node is spliced out of its parent's children
    /// list and reattached under its grandparent, with the traversal list
    /// kept consistent, so that later deletions near the disturbed nodes
    /// stay cheap. Runs in amortized `O(log n)` time.
    ///
    /// # Panics
    ///
    /// If `index` does not address a live node.
    pub fn find(&mut self, index: usize) -> usize {
        assert!(self.contains(index), "no live node at index {}", index);

        let mut current = index;
        loop {
            let parent = self.nodes[current].parent;
            if parent == current {
                return current;
            }
            let grandparent = self.nodes[parent].parent;
            if grandparent == parent {
                return parent;
            }
            self.relink(current);
            current = parent;
        }
    }

    /// Gives the root of the tree that `index` belongs to without updating
    /// any links on the way.
    ///
    /// Slightly faster than `find` but performs no restructuring; it is
    /// used where the tree is inspected or rebuilt immediately afterwards.
    #[inline]
    pub(crate) fn find_final(&self, mut index: usize) -> usize {
        while index != self.nodes[index].parent {
            index = self.nodes[index].parent;
        }

        index
    }

    /// Returns `true` if `first_index` and `second_index` are in the same
    /// set. Performs no restructuring.
    ///
    /// # Panics
    ///
    /// If either index does not address a live node.
    #[inline]
    pub fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        assert!(self.contains(first_index), "no live node at index {}", first_index);
        assert!(self.contains(second_index), "no live node at index {}", second_index);

        self.find_final(first_index) == self.find_final(second_index)
    }

    /// Returns the amount of nodes in the tree that `index` belongs to.
    ///
    /// This walks the tree's traversal list and takes `O(m)` time for a
    /// tree of `m` nodes.
    ///
    /// # Panics
    ///
    /// If `index` does not address a live node.
    pub fn tree_len(&self, index: usize) -> usize {
        assert!(self.contains(index), "no live node at index {}", index);

        let mut count = 1;
        let mut current = self.nodes[index].dfs_next;
        while current != index {
            count += 1;
            current = self.nodes[current].dfs_next;
        }

        count
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// A tree of more than four nodes is linked structurally by rank; a
    /// smaller tree is dissolved instead and its nodes reattached flat
    /// under the surviving root, which is what keeps later deletions in
    /// tiny trees trivial. Runs in amortized `O(log n)` time.
    ///
    /// # Panics
    ///
    /// If either index does not address a live node.
    pub fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return;
        }

        if self.tree_at_most(i, SMALL_UNION_MAX) {
            self.merge_small(i, j);
        } else if self.tree_at_most(j, SMALL_UNION_MAX) {
            self.merge_small(j, i);
        } else {
            self.link_by_rank(i, j);
        }

        #[cfg(debug_assertions)]
        self.check_invariants();
    }

    /// Removes the node at `index` from its set and frees its slot.
    ///
    /// A tree of at most five nodes is rebuilt from scratch without the
    /// node. In larger trees the node is first reduced to a leaf: an
    /// interior node trades places with a leaf of the same tree, which is
    /// reported as [`Removal::Relocated`] so that callers can carry the
    /// leaf's element binding over. The leaf is then unlinked from its
    /// parent's children list and the traversal list, and unless the tree
    /// is already flat a handful of nearby nodes is relinked to pay for
    /// future deletions. Runs in amortized `O(log n)` time.
    ///
    /// # Panics
    ///
    /// If `index` does not address a live node.
    ///
    /// [`Removal::Relocated`]: enum.Removal.html#variant.Relocated
    pub fn delete(&mut self, index: usize) -> Removal {
        assert!(self.contains(index), "no live node at index {}", index);

        let root = self.find_final(index);

        if self.tree_at_most(root, SMALL_DELETE_MAX) {
            self.rebuild_small(root, index);

            #[cfg(debug_assertions)]
            self.check_invariants();

            return Removal::Unlinked;
        }

        let (target, removal) = if self.nodes[index].child == NIL {
            (index, Removal::Unlinked)
        } else {
            let leaf = self.find_leaf(index);
            (leaf, Removal::Relocated { leaf })
        };

        let parent = self.nodes[target].parent;
        self.unlink_leaf(target);

        // A root of rank at most 1, or with at most one interior node, is
        // flat enough already and needs no rebalancing.
        let reduced = self.nodes[root].rank <= 1 || self.interior_at_most(root, 1);
        if !reduced {
            self.local_rebuild(root, parent);
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        removal
    }

    /// The `dfs_next` link of a live node, exposed for set iteration.
    #[inline]
    pub(crate) fn dfs_next(&self, index: usize) -> usize {
        self.nodes[index].dfs_next
    }

    /// Finds a leaf of the tree that `index` belongs to, in `O(1)` time
    /// except for nodes that are first children, which descend their child
    /// chain in `O(rank)` steps.
    ///
    /// The traversal list keeps every subtree contiguous with its root
    /// first, so the list predecessor of the root, and of any node with a
    /// left sibling, is the last node of a subtree and therefore a leaf.
    fn find_leaf(&self, index: usize) -> usize {
        if self.nodes[index].child == NIL {
            return index;
        }

        let parent = self.nodes[index].parent;
        if parent == index || self.nodes[parent].child != index {
            return self.nodes[index].dfs_prev;
        }

        // A first child is preceded by its parent, so descend instead.
        let mut current = self.nodes[index].child;
        while self.nodes[current].child != NIL {
            current = self.nodes[current].child;
        }

        current
    }

    /// Splices `index` out of its parent's children list and reattaches it
    /// as a child of its grandparent.
    ///
    /// The caller guarantees that both a parent and a distinct grandparent
    /// exist. The traversal list stays a preorder of the tree: a node that
    /// is its parent's last child slots in directly to the right of the
    /// parent with the list untouched, any other node moves its list
    /// segment directly before the parent and slots in to the left.
    fn relink(&mut self, index: usize) {
        let parent = self.nodes[index].parent;
        let grandparent = self.nodes[parent].parent;
        debug_assert!(parent != index && grandparent != parent);

        let first = self.nodes[parent].child;
        let next = self.nodes[index].c_next;
        if next == first {
            // Last child: its subtree already ends the parent's segment.
            self.detach_child(parent, index);
            self.attach_child_after(parent, index);
        } else {
            let last = self.nodes[next].dfs_prev;
            self.detach_child(parent, index);
            self.dfs_cut(index, last);
            self.dfs_splice_before(parent, index, last);
            self.attach_child_before(grandparent, parent, index);
        }
        self.nodes[index].parent = grandparent;

        self.child_detached(parent);

        #[cfg(debug_assertions)]
        self.check_invariants();
    }

    /// Bookkeeping after `parent` lost a child: a node whose children list
    /// drained becomes a leaf of rank 0 and leaves the interior list, and
    /// a root whose interior list drained with it is flat again and gets
    /// rank 1.
    fn child_detached(&mut self, parent: usize) {
        if self.nodes[parent].child != NIL {
            return;
        }

        self.nodes[parent].rank = 0;

        let grandparent = self.nodes[parent].parent;
        if grandparent == parent {
            // The parent is a root and now a singleton.
            return;
        }

        self.nl_remove(parent);
        if self.nodes[grandparent].parent == grandparent
            && self.nodes[grandparent].nl_next == grandparent
        {
            self.nodes[grandparent].rank = 1;
        }
    }

    /// Unlinks the leaf at `index` from its parent and the traversal list
    /// and frees its slot.
    fn unlink_leaf(&mut self, index: usize) {
        debug_assert!(self.nodes[index].child == NIL);
        debug_assert!(self.nodes[index].nl_next == index);

        let parent = self.nodes[index].parent;
        debug_assert!(parent != index);

        self.dfs_cut(index, index);
        self.detach_child(parent, index);
        self.child_detached(parent);
        self.free(index);
    }

    /// Relinks a bounded number of nodes near a deletion to keep the tree
    /// shallow: the first three nodes of the former parent's subtree in
    /// traversal order, or the first four entries of the interior list
    /// when the parent is the root itself.
    fn local_rebuild(&mut self, root: usize, parent: usize) {
        let mut picks = Vec::with_capacity(4);

        if parent == root {
            let mut current = self.nodes[root].nl_next;
            while current != root && picks.len() < 4 {
                picks.push(current);
                current = self.nodes[current].nl_next;
            }
        } else {
            let mut current = parent;
            for _ in 0..3 {
                picks.push(current);
                let next = self.nodes[current].dfs_next;
                if !self.in_subtree(next, parent) {
                    break;
                }
                current = next;
            }
        }

        for pick in picks {
            let p = self.nodes[pick].parent;
            if p == pick || self.nodes[p].parent == p {
                continue;
            }
            self.relink(pick);
        }
    }

    /// Rebuilds a tree of at most five nodes from scratch, without the
    /// node at `removed`: the surviving nodes become a flat tree rooted at
    /// the old root, or at the first survivor if the root itself was
    /// removed.
    fn rebuild_small(&mut self, root: usize, removed: usize) {
        let mut members = Vec::with_capacity(SMALL_DELETE_MAX);
        let mut current = root;
        loop {
            members.push(current);
            current = self.nodes[current].dfs_next;
            if current == root {
                break;
            }
        }

        let survivors: Vec<usize> = members.into_iter().filter(|&m| m != removed).collect();
        self.free(removed);

        if survivors.is_empty() {
            return;
        }

        let new_root = survivors[0];
        for &member in &survivors {
            let node = &mut self.nodes[member];
            node.parent = member;
            node.rank = 0;
            node.child = NIL;
            node.c_prev = member;
            node.c_next = member;
            node.dfs_prev = member;
            node.dfs_next = member;
            node.nl_prev = member;
            node.nl_next = member;
        }

        for &member in &survivors[1..] {
            self.nodes[member].parent = new_root;
            self.attach_last_child(new_root, member);
            self.dfs_splice_before(new_root, member, member);
        }

        if survivors.len() > 1 {
            self.nodes[new_root].rank = 1;
        }
    }

    /// Dissolves the tree rooted at `small_root` (at most four nodes) and
    /// reattaches every node flat under `into`.
    fn merge_small(&mut self, small_root: usize, into: usize) {
        let mut members = Vec::with_capacity(SMALL_UNION_MAX);
        let mut current = small_root;
        loop {
            members.push(current);
            current = self.nodes[current].dfs_next;
            if current == small_root {
                break;
            }
        }

        for &member in &members {
            {
                let node = &mut self.nodes[member];
                node.parent = into;
                node.rank = 0;
                node.child = NIL;
                node.c_prev = member;
                node.c_next = member;
                node.dfs_prev = member;
                node.dfs_next = member;
                node.nl_prev = member;
                node.nl_next = member;
            }
            self.attach_first_child(into, member);
            self.dfs_splice_after(into, member, member);
        }

        if self.nodes[into].rank == 0 {
            self.nodes[into].rank = 1;
        }
    }

    /// Links two roots of large trees by rank. The loser becomes the first
    /// child of the winner, its traversal list slots in directly after the
    /// winner, and it joins the winner's interior list together with its
    /// own interior nodes.
    fn link_by_rank(&mut self, i: usize, j: usize) {
        use std::cmp::Ordering;

        let (winner, loser) = match Ord::cmp(&self.nodes[i].rank, &self.nodes[j].rank) {
            Ordering::Less => (j, i),
            Ordering::Equal => {
                self.nodes[j].rank += 1;
                (j, i)
            }
            Ordering::Greater => (i, j),
        };

        // Large trees always have children, so the loser joins the
        // interior list.
        debug_assert!(self.nodes[loser].child != NIL);

        self.nodes[loser].parent = winner;
        self.attach_first_child(winner, loser);

        let last = self.nodes[loser].dfs_prev;
        self.dfs_splice_after(winner, loser, last);

        let nl_last = self.nodes[loser].nl_prev;
        let after = self.nodes[winner].nl_next;
        self.nodes[winner].nl_next = loser;
        self.nodes[loser].nl_prev = winner;
        self.nodes[nl_last].nl_next = after;
        self.nodes[after].nl_prev = nl_last;
    }

    /// Returns `true` if `index` lies in the subtree of `ancestor`,
    /// climbing at most the tree's height in parent links.
    fn in_subtree(&self, mut index: usize, ancestor: usize) -> bool {
        loop {
            if index == ancestor {
                return true;
            }
            let parent = self.nodes[index].parent;
            if parent == index {
                return false;
            }
            index = parent;
        }
    }

    /// Returns `true` if the tree rooted at `root` has at most `limit`
    /// nodes, walking at most `limit` steps of the traversal list.
    fn tree_at_most(&self, root: usize, limit: usize) -> bool {
        let mut count = 1;
        let mut current = self.nodes[root].dfs_next;
        while current != root {
            count += 1;
            if count > limit {
                return false;
            }
            current = self.nodes[current].dfs_next;
        }

        true
    }

    /// Returns `true` if the interior list of `root` has at most `limit`
    /// members.
    fn interior_at_most(&self, root: usize, limit: usize) -> bool {
        let mut count = 0;
        let mut current = self.nodes[root].nl_next;
        while current != root {
            count += 1;
            if count > limit {
                return false;
            }
            current = self.nodes[current].nl_next;
        }

        true
    }

    fn free(&mut self, index: usize) {
        let node = &mut self.nodes[index];
        node.parent = NIL;
        node.dfs_next = self.first_free;
        self.first_free = index;
        self.live -= 1;
    }

    /// Unlinks `index` from the children list of `parent`, moving the
    /// first-child head along if needed.
    fn detach_child(&mut self, parent: usize, index: usize) {
        let prev = self.nodes[index].c_prev;
        let next = self.nodes[index].c_next;

        if next == index {
            self.nodes[parent].child = NIL;
        } else {
            self.nodes[prev].c_next = next;
            self.nodes[next].c_prev = prev;
            if self.nodes[parent].child == index {
                self.nodes[parent].child = next;
            }
        }

        self.nodes[index].c_prev = index;
        self.nodes[index].c_next = index;
    }

    /// Inserts `index` directly before `sibling` in the children list of
    /// `parent`; `index` becomes the first child if `sibling` was.
    fn attach_child_before(&mut self, parent: usize, sibling: usize, index: usize) {
        let prev = self.nodes[sibling].c_prev;
        self.nodes[prev].c_next = index;
        self.nodes[index].c_prev = prev;
        self.nodes[index].c_next = sibling;
        self.nodes[sibling].c_prev = index;

        if self.nodes[parent].child == sibling {
            self.nodes[parent].child = index;
        }
    }

    /// Inserts `index` directly after `sibling` in its children list.
    fn attach_child_after(&mut self, sibling: usize, index: usize) {
        let next = self.nodes[sibling].c_next;
        self.nodes[sibling].c_next = index;
        self.nodes[index].c_prev = sibling;
        self.nodes[index].c_next = next;
        self.nodes[next].c_prev = index;
    }

    /// Makes `index` the first child of `parent`.
    fn attach_first_child(&mut self, parent: usize, index: usize) {
        let first = self.nodes[parent].child;
        if first == NIL {
            self.nodes[parent].child = index;
        } else {
            self.attach_child_before(parent, first, index);
        }
    }

    /// Makes `index` the last child of `parent`.
    fn attach_last_child(&mut self, parent: usize, index: usize) {
        let first = self.nodes[parent].child;
        if first == NIL {
            self.nodes[parent].child = index;
        } else {
            let prev = self.nodes[first].c_prev;
            self.nodes[prev].c_next = index;
            self.nodes[index].c_prev = prev;
            self.nodes[index].c_next = first;
            self.nodes[first].c_prev = index;
        }
    }

    /// Cuts the segment `first ..= last` out of its traversal list. The
    /// boundary links of the segment itself are left to the following
    /// splice.
    fn dfs_cut(&mut self, first: usize, last: usize) {
        let before = self.nodes[first].dfs_prev;
        let after = self.nodes[last].dfs_next;
        self.nodes[before].dfs_next = after;
        self.nodes[after].dfs_prev = before;
    }

    /// Splices the segment `first ..= last` into the traversal list
    /// directly before `position`.
    fn dfs_splice_before(&mut self, position: usize, first: usize, last: usize) {
        let before = self.nodes[position].dfs_prev;
        self.nodes[before].dfs_next = first;
        self.nodes[first].dfs_prev = before;
        self.nodes[last].dfs_next = position;
        self.nodes[position].dfs_prev = last;
    }

    /// Splices the segment `first ..= last` into the traversal list
    /// directly after `position`.
    fn dfs_splice_after(&mut self, position: usize, first: usize, last: usize) {
        let after = self.nodes[position].dfs_next;
        self.nodes[position].dfs_next = first;
        self.nodes[first].dfs_prev = position;
        self.nodes[last].dfs_next = after;
        self.nodes[after].dfs_prev = last;
    }

    /// Unlinks `index` from the interior list it is a member of, if any.
    fn nl_remove(&mut self, index: usize) {
        let prev = self.nodes[index].nl_prev;
        if prev == index {
            return;
        }

        let next = self.nodes[index].nl_next;
        self.nodes[prev].nl_next = next;
        self.nodes[next].nl_prev = prev;
        self.nodes[index].nl_prev = index;
        self.nodes[index].nl_next = index;
    }

    /// Verifies every structural invariant of the forest. Compiled and run
    /// after each mutating operation in debug builds only.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for i in 0..self.nodes.len() {
            if !self.contains(i) || seen.contains(&i) {
                continue;
            }
            let root = self.find_final(i);
            assert!(!seen.contains(&root), "tree of {} visited twice", root);
            self.check_tree(root, &mut seen);
        }
        assert_eq!(seen.len(), self.live, "live node count diverged");
    }

    #[cfg(debug_assertions)]
    fn check_tree(&self, root: usize, seen: &mut std::collections::HashSet<usize>) {
        use std::collections::HashSet;

        // Walk the children lists in preorder.
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            assert!(seen.insert(node), "node {} appears in two trees", node);
            order.push(node);

            let first = self.nodes[node].child;
            if first == NIL {
                assert_eq!(self.nodes[node].rank, 0, "leaf {} has nonzero rank", node);
                if node != root {
                    assert_eq!(self.nodes[node].nl_next, node, "leaf {} on interior list", node);
                }
                continue;
            }
            assert!(self.nodes[node].rank >= 1, "interior node {} has rank 0", node);

            let mut children = Vec::new();
            let mut child = first;
            loop {
                assert_eq!(self.nodes[child].parent, node, "parent link of {} is stale", child);
                assert!(
                    self.nodes[child].rank < self.nodes[node].rank,
                    "rank of child {} not below its parent",
                    child
                );
                assert_eq!(self.nodes[self.nodes[child].c_next].c_prev, child);
                children.push(child);
                child = self.nodes[child].c_next;
                if child == first {
                    break;
                }
                assert!(children.len() <= self.live, "children list of {} does not close", node);
            }
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }

        // The traversal list must spell out exactly that preorder.
        let mut ring = Vec::with_capacity(order.len());
        let mut current = root;
        loop {
            ring.push(current);
            assert_eq!(self.nodes[self.nodes[current].dfs_next].dfs_prev, current);
            current = self.nodes[current].dfs_next;
            if current == root {
                break;
            }
            assert!(ring.len() <= order.len(), "traversal list leaves the tree of {}", root);
        }
        assert_eq!(ring, order, "traversal list out of step with the tree of {}", root);

        // The interior list holds exactly the non-leaf nodes below the root.
        let interior: HashSet<usize> = order
            .iter()
            .copied()
            .filter(|&n| n != root && self.nodes[n].child != NIL)
            .collect();
        let mut listed = HashSet::new();
        let mut current = self.nodes[root].nl_next;
        while current != root {
            assert_eq!(self.nodes[self.nodes[current].nl_next].nl_prev, current);
            assert!(listed.insert(current), "interior list of {} repeats {}", root, current);
            assert!(listed.len() <= order.len(), "interior list of {} does not close", root);
            current = self.nodes[current].nl_next;
        }
        assert_eq!(listed, interior, "interior list out of step with the tree of {}", root);
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}
