use core::iter::FusedIterator;

use super::LinkedQueue;

/// Owning iterator that drains a [`LinkedQueue`] front-to-back.
pub struct LinkedIntoIter<T> {
  queue: LinkedQueue<T>,
}

impl<T> LinkedIntoIter<T> {
  pub(super) const fn new(queue: LinkedQueue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for LinkedIntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.pop_node()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.queue.len, Some(self.queue.len))
  }
}

impl<T> ExactSizeIterator for LinkedIntoIter<T> {}

impl<T> FusedIterator for LinkedIntoIter<T> {}
