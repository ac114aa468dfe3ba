use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::LinkedNode;

/// Borrowing front-to-back iterator over a [`LinkedQueue`](super::LinkedQueue).
pub struct LinkedIter<'a, T> {
  next:      Option<NonNull<LinkedNode<T>>>,
  remaining: usize,
  _marker:   PhantomData<&'a LinkedNode<T>>,
}

impl<T> LinkedIter<'_, T> {
  pub(super) const fn new(head: Option<NonNull<LinkedNode<T>>>, len: usize) -> Self {
    Self { next: head, remaining: len, _marker: PhantomData }
  }
}

impl<T> Clone for LinkedIter<'_, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, remaining: self.remaining, _marker: PhantomData }
  }
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.next.map(|node| {
      // SAFETY: the queue is borrowed for `'a`, so every reachable node stays alive and unchanged.
      let node = unsafe { &*node.as_ptr() };
      self.next = node.next;
      self.remaining -= 1;
      &node.value
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for LinkedIter<'_, T> {}

impl<T> FusedIterator for LinkedIter<'_, T> {}
