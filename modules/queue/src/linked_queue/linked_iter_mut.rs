use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::LinkedNode;

/// Mutable front-to-back iterator over a [`LinkedQueue`](super::LinkedQueue).
pub struct LinkedIterMut<'a, T> {
  next:      Option<NonNull<LinkedNode<T>>>,
  remaining: usize,
  _marker:   PhantomData<&'a mut LinkedNode<T>>,
}

impl<T> LinkedIterMut<'_, T> {
  pub(super) const fn new(head: Option<NonNull<LinkedNode<T>>>, len: usize) -> Self {
    Self { next: head, remaining: len, _marker: PhantomData }
  }
}

impl<'a, T> Iterator for LinkedIterMut<'a, T> {
  type Item = &'a mut T;

  fn next(&mut self) -> Option<Self::Item> {
    self.next.map(|node| {
      // SAFETY: the queue is mutably borrowed for `'a` and each node is yielded at most once.
      let node = unsafe { &mut *node.as_ptr() };
      self.next = node.next;
      self.remaining -= 1;
      &mut node.value
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for LinkedIterMut<'_, T> {}

impl<T> FusedIterator for LinkedIterMut<'_, T> {}
