use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    list::LinkedList,
    node::ListNode,
    traits::{Link, LinkWithPrev},
};

/// An iterator over the nodes of a linked list, front to back.
pub struct Nodes<'a, T> {
    front: Option<NonNull<ListNode<T>>>,
    back: Option<NonNull<ListNode<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a ListNode<T>>,
}

impl<'a, T> Nodes<'a, T> {
    /// Creates an iterator over the nodes of `list`.
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            front: list.next(),
            back: list.prev(),
            remaining: list.count(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a ListNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front.map(|front| {
            let node = unsafe { &*front.as_ptr() };
            self.front = node.link.next();
            self.remaining -= 1;
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.map(|back| {
            let node = unsafe { &*back.as_ptr() };
            self.back = node.link.prev();
            self.remaining -= 1;
            node
        })
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Nodes<'_, T> {}
unsafe impl<T: Sync> Sync for Nodes<'_, T> {}

/// An iterator over the data of a linked list, front to back.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            nodes: Nodes::new(list),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(ListNode::data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back().map(ListNode::data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

/// An owning iterator that pops the data out of a linked list, front to back.
///
/// Every node is released as it is yielded; whatever is left is dropped
/// together with the iterator.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_data_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.count(), Some(self.list.count()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_data_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
