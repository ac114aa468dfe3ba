use crate::{OfferOutcome, QueueDisplay, QueueError, QueueSize};

/// First-in-first-out queue abstraction shared by every queue implementation.
///
/// The element pushed least recently is always the next one popped. Peeking or popping an empty
/// queue fails with [`QueueError::Empty`] instead of returning a sentinel.
pub trait FifoQueue<T> {
  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns `true` when the queue holds no element.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the capacity of the backing storage.
  fn capacity(&self) -> QueueSize;

  /// Borrows the front element, the next one to be popped.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  fn front(&self) -> Result<&T, QueueError<T>>;

  /// Mutably borrows the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  fn front_mut(&mut self) -> Result<&mut T, QueueError<T>>;

  /// Borrows the back element, the most recently pushed one.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  fn back(&self) -> Result<&T, QueueError<T>>;

  /// Mutably borrows the back element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  fn back_mut(&mut self) -> Result<&mut T, QueueError<T>>;

  /// Appends `item` at the back of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when a bounded queue rejects the element and
  /// [`QueueError::AllocError`] when growing the storage fails. Both hand `item` back.
  fn push(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>>;

  /// Builds an element with `make` and appends it at the back of the queue.
  ///
  /// # Errors
  ///
  /// Same as [`FifoQueue::push`].
  fn emplace<F>(&mut self, make: F) -> Result<OfferOutcome, QueueError<T>>
  where
    F: FnOnce() -> T, {
    self.push(make())
  }

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  fn pop(&mut self) -> Result<T, QueueError<T>>;

  /// Drops every element front-to-back, leaving the queue empty.
  fn clear(&mut self);

  /// Iterates over the elements front-to-back without consuming them.
  fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
  where
    T: 'a;

  /// Returns a [`core::fmt::Display`] adapter rendering `prefix[e1<separator>e2...]`.
  fn display<'a>(&'a self, prefix: &'a str, separator: &'a str) -> QueueDisplay<'a, T, Self>
  where
    Self: Sized, {
    QueueDisplay::new(self, prefix, separator)
  }
}
