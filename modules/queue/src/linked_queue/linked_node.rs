use core::ptr::NonNull;

/// Heap node of a [`LinkedQueue`](super::LinkedQueue).
pub(super) struct LinkedNode<T> {
  pub(super) value: T,
  pub(super) next:  Option<NonNull<LinkedNode<T>>>,
}

impl<T> LinkedNode<T> {
  pub(super) const fn new(value: T) -> Self {
    Self { value, next: None }
  }
}
