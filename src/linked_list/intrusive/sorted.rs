use core::fmt;

use super::{
    iter::{IntoIter, Iter, Nodes},
    list::LinkedList,
    node::{ListNode, Node},
    traits::Link,
};

/// A linked list kept in ascending order by a `greater_than` comparator.
///
/// Only insertion is order-aware: it places each node after every element it
/// is not less than, so equal elements stay in insertion order. Removing from
/// either end cannot break the order, so everything else is forwarded to the
/// underlying [`LinkedList`].
pub struct SortedList<T, F> {
    list: LinkedList<T>,
    greater_than: F,
}

impl<T, F> SortedList<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    /// Creates an empty list ordered by `greater_than`, which returns true
    /// when its first argument must sort strictly after the second.
    pub const fn new(greater_than: F) -> Self {
        SortedList {
            list: LinkedList::new(),
            greater_than,
        }
    }

    /// Creates an empty list if a comparator is given, `None` otherwise.
    pub fn with_comparator(greater_than: Option<F>) -> Option<Self> {
        greater_than.map(Self::new)
    }

    /// Insert a node, keeping the list sorted least to greatest. Does nothing
    /// if `node` is `None`.
    pub fn insert(&mut self, node: Option<Node<T>>) {
        let Some(node) = node else {
            return;
        };

        // Appending in order is the common case and needs no scan.
        if let Some(back) = self.list.peek_back() {
            if !(self.greater_than)(back.data(), node.data()) {
                self.list.push_back(node);
                return;
            }
        }

        let mut position = self.list.next();
        while let Some(existing) = position {
            let existing = unsafe { existing.as_ref() };
            if (self.greater_than)(existing.data(), node.data()) {
                break;
            }
            position = existing.link.next();
        }
        unsafe { self.list.insert_before(position, node) };
    }

    /// Allocate a node around `data` and insert it in order.
    ///
    /// If the allocation fails the list is left untouched and `data` is
    /// handed back.
    pub fn emplace_insert(&mut self, data: T) -> Result<(), T> {
        self.insert(Some(Node::try_allocate(data)?));
        Ok(())
    }
}

impl<T, F> SortedList<T, F> {
    /// Get the number of nodes in the list
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Return the least node, without popping.
    pub fn peek_front(&self) -> Option<&ListNode<T>> {
        self.list.peek_front()
    }

    /// Return the greatest node, without popping.
    pub fn peek_back(&self) -> Option<&ListNode<T>> {
        self.list.peek_back()
    }

    /// Destroy the list and all of its nodes, passing each node's data to
    /// `destroyer`, least to greatest.
    pub fn destroy<D>(self, destroyer: D)
    where
        D: FnMut(T),
    {
        self.list.destroy(destroyer);
    }

    /// Apply `use_data` to the data of every node, least to greatest.
    ///
    /// Unlike [`LinkedList::foreach`], the data is only lent as `&T`: a
    /// callback that changed an element could move it out of order, and the
    /// ordering is only established on insertion. Use [`SortedList::into_list`]
    /// to get mutable access once the ordering is no longer needed.
    pub fn foreach<U>(&self, use_data: U)
    where
        U: FnMut(&T),
    {
        self.list.iter().for_each(use_data);
    }

    /// Pop the least node.
    pub fn pop_front(&mut self) -> Option<Node<T>> {
        self.list.pop_front()
    }

    /// Pop the greatest node.
    pub fn pop_back(&mut self) -> Option<Node<T>> {
        self.list.pop_back()
    }

    /// Pop the least data, releasing the node that held it.
    pub fn pop_data_front(&mut self) -> Option<T> {
        self.list.pop_data_front()
    }

    /// Pop the greatest data, releasing the node that held it.
    pub fn pop_data_back(&mut self) -> Option<T> {
        self.list.pop_data_back()
    }

    /// Find the first node, least to greatest, whose data matches `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&ListNode<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.list.find(predicate)
    }

    /// Get an iterator over the data, least to greatest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Get an iterator over the nodes, least to greatest.
    pub fn nodes(&self) -> Nodes<'_, T> {
        self.list.nodes()
    }

    /// Get the `greater_than` comparator the list is ordered by.
    pub fn comparator(&self) -> &F {
        &self.greater_than
    }

    /// Gives up the ordering, returning the nodes as a plain list.
    pub fn into_list(self) -> LinkedList<T> {
        self.list
    }
}

impl<T, F> IntoIterator for SortedList<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T, F> IntoIterator for &'a SortedList<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.list.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SortedList<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list.iter()).finish()
    }
}
