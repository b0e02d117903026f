use core::{fmt, marker::PhantomData, ptr::NonNull};

use super::{
    double::DoubleLink,
    iter::{IntoIter, Iter, Nodes},
    node::{ListNode, Node},
    sort::merge_sort,
    traits::{Link, LinkWithPrev},
};

/// A doubly linked list that owns its nodes.
///
/// Nodes enter the list either as an already allocated [`Node`] (`push_*`)
/// or as bare data (`emplace_*`), and leave it either as an owned [`Node`]
/// (`pop_*`) or as bare data (`pop_data_*`). Every endpoint operation is O(1).
pub struct LinkedList<T> {
    ends: DoubleLink<T>,
    count: usize,
    _marker: PhantomData<Node<T>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            ends: DoubleLink::new(),
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Get the number of nodes in the linked list
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Return the node at the front, without popping.
    pub fn peek_front(&self) -> Option<&ListNode<T>> {
        self.next().map(|front| unsafe { &*front.as_ptr() })
    }

    /// Return the node at the back, without popping.
    pub fn peek_back(&self) -> Option<&ListNode<T>> {
        self.prev().map(|back| unsafe { &*back.as_ptr() })
    }

    /// Push a node to the front. If the list is empty, the node becomes both
    /// front and back.
    pub fn push_front(&mut self, node: Node<T>) {
        let front = self.next();
        unsafe { self.link_between(node.into_raw(), None, front) };
    }

    /// Push a node to the back. If the list is empty, the node becomes both
    /// front and back.
    pub fn push_back(&mut self, node: Node<T>) {
        let back = self.prev();
        unsafe { self.link_between(node.into_raw(), back, None) };
    }

    /// Allocate a node around `data` and push it to the front.
    ///
    /// If the allocation fails the list is left untouched and `data` is
    /// handed back.
    pub fn emplace_front(&mut self, data: T) -> Result<(), T> {
        self.push_front(Node::try_allocate(data)?);
        Ok(())
    }

    /// Allocate a node around `data` and push it to the back.
    ///
    /// If the allocation fails the list is left untouched and `data` is
    /// handed back.
    pub fn emplace_back(&mut self, data: T) -> Result<(), T> {
        self.push_back(Node::try_allocate(data)?);
        Ok(())
    }

    /// Pop the node at the front. The caller now owns the node and its data.
    pub fn pop_front(&mut self) -> Option<Node<T>> {
        let front = self.next()?;
        unsafe {
            self.unlink(front);
            Some(Node::from_raw(front))
        }
    }

    /// Pop the node at the back. The caller now owns the node and its data.
    pub fn pop_back(&mut self) -> Option<Node<T>> {
        let back = self.prev()?;
        unsafe {
            self.unlink(back);
            Some(Node::from_raw(back))
        }
    }

    /// Pop the data at the front, releasing the node that held it.
    pub fn pop_data_front(&mut self) -> Option<T> {
        self.pop_front().map(Node::into_data)
    }

    /// Pop the data at the back, releasing the node that held it.
    pub fn pop_data_back(&mut self) -> Option<T> {
        self.pop_back().map(Node::into_data)
    }

    /// Destroy the list and all of its nodes, passing each node's data to
    /// `destroyer`, front to back.
    ///
    /// To tear the list down while keeping the data, iterate it by value
    /// instead.
    pub fn destroy<D>(self, destroyer: D)
    where
        D: FnMut(T),
    {
        self.into_iter().for_each(destroyer);
    }

    /// Apply `use_data` to the data of every node, front to back.
    pub fn foreach<F>(&mut self, mut use_data: F)
    where
        F: FnMut(&mut T),
    {
        let mut current = self.next();
        while let Some(node) = current {
            let node = unsafe { &mut *node.as_ptr() };
            use_data(&mut node.data);
            current = node.link.next();
        }
    }

    /// Find the first node, front to back, whose data matches `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&ListNode<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.nodes().find(|node| predicate(node.data()))
    }

    /// Sort the list in place so that no node is `greater_than` its successor.
    ///
    /// The sort is stable and runs in O(n log n) without allocating. If
    /// `greater_than` panics the list keeps all of its nodes, in an
    /// unspecified order.
    pub fn sort<F>(&mut self, mut greater_than: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.count < 2 {
            return;
        }
        merge_sort(self, &mut greater_than);
    }

    /// Get an iterator over the data, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Get an iterator over the nodes, front to back.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Links `node` in before `next`, or at the back when `next` is `None`.
    ///
    /// # Safety
    ///
    /// `next`, if any, must be a node of this list.
    pub(crate) unsafe fn insert_before(&mut self, next: Option<NonNull<ListNode<T>>>, node: Node<T>) {
        let prev = match next {
            Some(next) => unsafe { next.as_ref().link.prev() },
            None => self.prev(),
        };
        unsafe { self.link_between(node.into_raw(), prev, next) };
    }

    /// The link that owns the pointer into or out of `at`: the node's own
    /// link, or the list itself when `at` is past either end.
    ///
    /// # Safety
    ///
    /// `at`, if any, must be a live node.
    unsafe fn link_at(
        &mut self,
        at: Option<NonNull<ListNode<T>>>,
    ) -> &mut dyn LinkWithPrev<Target = ListNode<T>> {
        match at {
            Some(node) => unsafe { &mut (*node.as_ptr()).link },
            None => self,
        }
    }

    /// # Safety
    ///
    /// `node` must be unlinked, and `prev`/`next` must be adjacent in this
    /// list (`None` standing for the corresponding end).
    unsafe fn link_between(
        &mut self,
        node: NonNull<ListNode<T>>,
        prev: Option<NonNull<ListNode<T>>>,
        next: Option<NonNull<ListNode<T>>>,
    ) {
        unsafe {
            let link = &mut (*node.as_ptr()).link;
            link.set_prev(prev);
            link.set_next(next);
            self.link_at(prev).set_next(Some(node));
            self.link_at(next).set_prev(Some(node));
        }
        self.count += 1;
    }

    /// # Safety
    ///
    /// `node` must be a node of this list.
    unsafe fn unlink(&mut self, node: NonNull<ListNode<T>>) {
        unsafe {
            let link = &mut (*node.as_ptr()).link;
            let (prev, next) = (link.prev(), link.next());
            *link = DoubleLink::new();
            self.link_at(prev).set_next(next);
            self.link_at(next).set_prev(prev);
        }
        self.count -= 1;
    }
}

impl<T> Link for LinkedList<T> {
    type Target = ListNode<T>;

    /// The front of the list. Treating the list as a `Link` lets the same
    /// linking code handle both interior nodes and the ends.
    fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.ends.next()
    }

    fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.ends.set_next(next);
    }
}

impl<T> LinkWithPrev for LinkedList<T> {
    /// The back of the list.
    fn prev(&self) -> Option<NonNull<ListNode<T>>> {
        self.ends.prev()
    }

    fn set_prev(&mut self, prev: Option<NonNull<ListNode<T>>>) {
        self.ends.set_prev(prev);
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while let Some(node) = self.pop_front() {
            drop(node);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push_back(Node::new(data));
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
