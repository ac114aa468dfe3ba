use core::{
  iter::{Chain, FusedIterator},
  slice,
};

/// Borrowing front-to-back iterator over a [`RingQueue`](super::RingQueue).
///
/// Holding it keeps the queue borrowed, so the queue cannot be pushed to or popped from while the
/// iterator is alive.
pub struct RingIter<'a, T> {
  inner:     Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
  remaining: usize,
}

impl<'a, T> RingIter<'a, T> {
  pub(super) fn new(front: &'a [Option<T>], back: &'a [Option<T>], len: usize) -> Self {
    Self { inner: front.iter().chain(back.iter()), remaining: len }
  }
}

impl<T> Clone for RingIter<'_, T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), remaining: self.remaining }
  }
}

impl<'a, T> Iterator for RingIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let item = self.inner.find_map(Option::as_ref)?;
    self.remaining -= 1;
    Some(item)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> DoubleEndedIterator for RingIter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let item = self.inner.by_ref().rev().find_map(Option::as_ref)?;
    self.remaining -= 1;
    Some(item)
  }
}

impl<T> ExactSizeIterator for RingIter<'_, T> {}

impl<T> FusedIterator for RingIter<'_, T> {}
