use core::iter::FusedIterator;

use super::RingQueue;

/// Owning iterator that drains a [`RingQueue`] front-to-back.
pub struct RingIntoIter<T> {
  queue: RingQueue<T>,
}

impl<T> RingIntoIter<T> {
  pub(super) const fn new(queue: RingQueue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for RingIntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.take_front()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.queue.len, Some(self.queue.len))
  }
}

impl<T> DoubleEndedIterator for RingIntoIter<T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.queue.take_back()
  }
}

impl<T> ExactSizeIterator for RingIntoIter<T> {}

impl<T> FusedIterator for RingIntoIter<T> {}
