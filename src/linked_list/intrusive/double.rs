use core::ptr::NonNull;

use super::{
    node::ListNode,
    traits::{Link, LinkWithPrev},
};

/// The pair of neighbour links carried by every node.
///
/// A `LinkedList` carries one as well, where `next` is the front of the list
/// and `prev` is the back.
pub(crate) struct DoubleLink<T> {
    next: Option<NonNull<ListNode<T>>>,
    prev: Option<NonNull<ListNode<T>>>,
}

impl<T> DoubleLink<T> {
    /// Creates a link with both sides unset.
    pub(crate) const fn new() -> Self {
        DoubleLink {
            next: None,
            prev: None,
        }
    }
}

impl<T> Link for DoubleLink<T> {
    type Target = ListNode<T>;

    #[inline]
    fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.next = next;
    }
}

impl<T> LinkWithPrev for DoubleLink<T> {
    #[inline]
    fn prev(&self) -> Option<NonNull<ListNode<T>>> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NonNull<ListNode<T>>>) {
        self.prev = prev;
    }
}
