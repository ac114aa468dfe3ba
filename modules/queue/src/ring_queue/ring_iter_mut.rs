use core::{
  iter::{Chain, FusedIterator},
  slice,
};

/// Mutable front-to-back iterator over a [`RingQueue`](super::RingQueue).
pub struct RingIterMut<'a, T> {
  inner:     Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
  remaining: usize,
}

impl<'a, T> RingIterMut<'a, T> {
  pub(super) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>], len: usize) -> Self {
    Self { inner: front.iter_mut().chain(back.iter_mut()), remaining: len }
  }
}

impl<'a, T> Iterator for RingIterMut<'a, T> {
  type Item = &'a mut T;

  fn next(&mut self) -> Option<Self::Item> {
    let item = self.inner.find_map(Option::as_mut)?;
    self.remaining -= 1;
    Some(item)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> DoubleEndedIterator for RingIterMut<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let item = self.inner.by_ref().rev().find_map(Option::as_mut)?;
    self.remaining -= 1;
    Some(item)
  }
}

impl<T> ExactSizeIterator for RingIterMut<'_, T> {}

impl<T> FusedIterator for RingIterMut<'_, T> {}
