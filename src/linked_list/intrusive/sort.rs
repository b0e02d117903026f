use core::ptr::NonNull;

use super::{
    list::LinkedList,
    node::ListNode,
    traits::{Link, LinkWithPrev},
};

type NodePtr<T> = NonNull<ListNode<T>>;

/// Sorts `list` in place with a bottom-up merge sort.
///
/// Runs of width 1, 2, 4, ... are merged pairwise until a single pass makes
/// at most one merge. A node from the right run is only taken when the left
/// one is strictly greater, which keeps equal elements in input order.
///
/// If `greater_than` panics, the nodes are spliced back into `list` in
/// whatever order the merge had reached, so the list stays well formed.
pub(crate) fn merge_sort<T, F>(list: &mut LinkedList<T>, greater_than: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let head = list.next();
    let mut state = MergeState {
        list,
        head,
        tail: None,
        left: None,
        left_len: 0,
        right: None,
    };
    let mut width = 1usize;

    loop {
        state.right = state.head.take();
        state.tail = None;
        let mut merges = 0usize;

        while state.right.is_some() {
            merges += 1;

            // Step `width` nodes ahead to find the start of the right run.
            state.left = state.right;
            state.left_len = 0;
            while state.left_len < width {
                let Some(node) = state.right else { break };
                state.left_len += 1;
                state.right = unsafe { node.as_ref().link.next() };
            }
            let mut right_len = width;

            loop {
                let node = match (state.left, state.right) {
                    (Some(l), Some(r)) if state.left_len > 0 && right_len > 0 => {
                        if unsafe { greater_than(&l.as_ref().data, &r.as_ref().data) } {
                            advance(&mut state.right, &mut right_len, r)
                        } else {
                            advance(&mut state.left, &mut state.left_len, l)
                        }
                    }
                    (Some(l), _) if state.left_len > 0 => {
                        advance(&mut state.left, &mut state.left_len, l)
                    }
                    (_, Some(r)) if right_len > 0 => advance(&mut state.right, &mut right_len, r),
                    _ => break,
                };
                state.append(node);
            }
        }

        if let Some(tail) = state.tail {
            unsafe { (*tail.as_ptr()).link.set_next(None) };
        }

        if merges <= 1 {
            // Dropping `state` writes the sorted chain back into the list.
            return;
        }
        width *= 2;
    }
}

/// Merge progress, relinked into the list when dropped.
///
/// The nodes are always split into three parts: the merged output
/// `head..=tail`, `left_len` unconsumed nodes of the left run starting at
/// `left`, and everything reachable from `right`. Unconsumed nodes keep their
/// original `next` links, so `right` reaches the rest of the right run and
/// every run after it.
struct MergeState<'a, T> {
    list: &'a mut LinkedList<T>,
    head: Option<NodePtr<T>>,
    tail: Option<NodePtr<T>>,
    left: Option<NodePtr<T>>,
    left_len: usize,
    right: Option<NodePtr<T>>,
}

impl<T> MergeState<'_, T> {
    fn append(&mut self, node: NodePtr<T>) {
        unsafe {
            match self.tail {
                Some(tail) => (*tail.as_ptr()).link.set_next(Some(node)),
                None => self.head = Some(node),
            }
            (*node.as_ptr()).link.set_prev(self.tail);
        }
        self.tail = Some(node);
    }
}

impl<T> Drop for MergeState<'_, T> {
    fn drop(&mut self) {
        // The left run's last unconsumed node still points at the start of
        // the right run, which may already be merged.
        let pending = match self.left {
            Some(left) if self.left_len > 0 => unsafe {
                let mut last = left;
                for _ in 1..self.left_len {
                    if let Some(next) = last.as_ref().link.next() {
                        last = next;
                    }
                }
                (*last.as_ptr()).link.set_next(self.right);
                Some(left)
            },
            _ => self.right,
        };
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).link.set_next(pending) },
            None => self.head = pending,
        }

        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                (*node.as_ptr()).link.set_prev(prev);
                current = node.as_ref().link.next();
            }
            prev = Some(node);
        }
        self.list.set_next(self.head);
        self.list.set_prev(prev);
    }
}

/// Consumes `node` from the run at `cursor`, moving the cursor to its successor.
fn advance<T>(cursor: &mut Option<NodePtr<T>>, len: &mut usize, node: NodePtr<T>) -> NodePtr<T> {
    *cursor = unsafe { node.as_ref().link.next() };
    *len -= 1;
    node
}
