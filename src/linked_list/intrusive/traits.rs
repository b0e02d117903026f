use core::ptr::NonNull;

/// A trait for a link in a linked list.
pub(crate) trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a link with a previous pointer.
pub(crate) trait LinkWithPrev: Link {
    /// Get the previous pointer in the linked list
    fn prev(&self) -> Option<NonNull<Self::Target>>;

    /// Set the previous pointer in the linked list
    fn set_prev(&mut self, prev: Option<NonNull<Self::Target>>);
}
