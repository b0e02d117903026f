use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

use alloc::alloc::{alloc, dealloc, handle_alloc_error};

use super::{
    double::DoubleLink,
    traits::{Link, LinkWithPrev},
};

/// A node of a linked list: the payload and the links to its neighbours.
///
/// A `ListNode` is only ever seen behind a reference, either borrowed from a
/// list (`peek_front`, `find`, ...) or through an owned [`Node`] handle.
pub struct ListNode<T> {
    pub(crate) link: DoubleLink<T>,
    pub(crate) data: T,
}

impl<T> ListNode<T> {
    const fn new(data: T) -> Self {
        ListNode {
            link: DoubleLink::new(),
            data,
        }
    }

    /// Get the next node, `None` if this node is the back of its list or
    /// is not linked at all.
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.link.next().map(|next| unsafe { &*next.as_ptr() })
    }

    /// Get the previous node, `None` if this node is the front of its list or
    /// is not linked at all.
    pub fn prev(&self) -> Option<&ListNode<T>> {
        self.link.prev().map(|prev| unsafe { &*prev.as_ptr() })
    }

    /// Get the data associated with the node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data associated with the node
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode").field("data", &self.data).finish()
    }
}

unsafe impl<T: Sync> Sync for ListNode<T> {}

/// An owned, heap allocated node that is not part of any list.
///
/// `Node` is what moves in and out of lists: `push_*` consumes one and
/// `pop_*` hands one back, so a node can never be linked into two lists at
/// once. Dropping a `Node` drops its payload; [`Node::into_data`] releases
/// the node and gives the payload back instead.
pub struct Node<T> {
    ptr: NonNull<ListNode<T>>,
    _marker: PhantomData<ListNode<T>>,
}

impl<T> Node<T> {
    /// Allocates a free-standing node holding `data`.
    ///
    /// Returns `None` if the allocator fails; `data` is dropped in that case.
    /// Use [`Node::try_allocate`] to get it back.
    pub fn allocate(data: T) -> Option<Self> {
        Self::try_allocate(data).ok()
    }

    /// Allocates a free-standing node holding `data`, handing `data` back if
    /// the allocator fails.
    pub fn try_allocate(data: T) -> Result<Self, T> {
        // `ListNode` always holds its two links, so the layout is never zero-sized.
        let raw = unsafe { alloc(Self::layout()) }.cast::<ListNode<T>>();
        let Some(ptr) = NonNull::new(raw) else {
            return Err(data);
        };
        unsafe { ptr.as_ptr().write(ListNode::new(data)) };
        Ok(Node {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Allocates a node, aborting through [`handle_alloc_error`] on failure.
    pub(crate) fn new(data: T) -> Self {
        match Self::try_allocate(data) {
            Ok(node) => node,
            Err(_) => handle_alloc_error(Self::layout()),
        }
    }

    /// Releases the node and passes its payload to `destroyer`.
    pub fn destroy<D>(self, destroyer: D)
    where
        D: FnOnce(T),
    {
        destroyer(self.into_data());
    }

    /// Releases the node and returns its payload to the caller.
    pub fn into_data(self) -> T {
        let ptr = self.into_raw();
        unsafe { Self::release(ptr) }
    }

    /// Gives up ownership of the allocation without releasing it.
    pub(crate) fn into_raw(self) -> NonNull<ListNode<T>> {
        ManuallyDrop::new(self).ptr
    }

    /// Takes ownership of a node previously leaked by [`Node::into_raw`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `into_raw`, must not be linked into a list and
    /// must not be owned by another `Node`.
    pub(crate) unsafe fn from_raw(ptr: NonNull<ListNode<T>>) -> Self {
        debug_assert!(unsafe { ptr.as_ref().link.next().is_none() });
        debug_assert!(unsafe { ptr.as_ref().link.prev().is_none() });
        Node {
            ptr,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `ptr` must be an unlinked allocation made by `try_allocate` that is
    /// not used again afterwards.
    unsafe fn release(ptr: NonNull<ListNode<T>>) -> T {
        unsafe {
            let node = ptr.as_ptr().read();
            dealloc(ptr.as_ptr().cast(), Self::layout());
            node.data
        }
    }

    fn layout() -> Layout {
        Layout::new::<ListNode<T>>()
    }
}

impl<T> Deref for Node<T> {
    type Target = ListNode<T>;

    fn deref(&self) -> &ListNode<T> {
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> DerefMut for Node<T> {
    fn deref_mut(&mut self) -> &mut ListNode<T> {
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        drop(unsafe { Self::release(self.ptr) });
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.data).finish()
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
