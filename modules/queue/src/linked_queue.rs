//! Singly linked queue with O(1) push and pop and no reallocation.

mod linked_into_iter;
mod linked_iter;
mod linked_iter_mut;
mod linked_node;
#[cfg(test)]
mod tests;

use alloc::boxed::Box;
use core::{fmt, marker::PhantomData, ptr::NonNull};

pub use linked_into_iter::LinkedIntoIter;
pub use linked_iter::LinkedIter;
pub use linked_iter_mut::LinkedIterMut;
use linked_node::LinkedNode;

use crate::{FifoQueue, OfferOutcome, QueueDisplay, QueueError, QueueSize};

/// FIFO queue stored as a chain of heap nodes.
///
/// Every push allocates one node and every pop frees one, so there is no capacity limit and no
/// reallocation. Node allocation failure aborts through the global allocation error handler.
pub struct LinkedQueue<T> {
  head:    Option<NonNull<LinkedNode<T>>>,
  tail:    Option<NonNull<LinkedNode<T>>>,
  len:     usize,
  _marker: PhantomData<Box<LinkedNode<T>>>,
}

// SAFETY: the queue owns every node exclusively, like `Box<LinkedNode<T>>` would.
unsafe impl<T: Send> Send for LinkedQueue<T> {}

// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: None, len: 0, _marker: PhantomData }
  }

  /// Iterates over shared references front-to-back.
  #[must_use]
  pub fn iter(&self) -> LinkedIter<'_, T> {
    LinkedIter::new(self.head, self.len)
  }

  /// Iterates over mutable references front-to-back.
  #[must_use]
  pub fn iter_mut(&mut self) -> LinkedIterMut<'_, T> {
    LinkedIterMut::new(self.head, self.len)
  }

  fn push_node(&mut self, value: T) {
    let node = NonNull::from(Box::leak(Box::new(LinkedNode::new(value))));
    match self.tail {
      // SAFETY: `tail` points to a live node owned by this queue.
      | Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
      | None => self.head = Some(node),
    }
    self.tail = Some(node);
    self.len += 1;
  }

  fn pop_node(&mut self) -> Option<T> {
    self.head.map(|head| {
      // SAFETY: `head` was produced by `Box::leak` in `push_node` and is unlinked right here.
      let node = unsafe { Box::from_raw(head.as_ptr()) };
      self.head = node.next;
      if self.head.is_none() {
        self.tail = None;
      }
      self.len -= 1;
      node.value
    })
  }
}

impl<T> FifoQueue<T> for LinkedQueue<T> {
  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::Limitless
  }

  fn front(&self) -> Result<&T, QueueError<T>> {
    // SAFETY: `head` points to a live node; the borrow is tied to `&self`.
    self.head.map(|node| unsafe { &(*node.as_ptr()).value }).ok_or(QueueError::Empty)
  }

  fn front_mut(&mut self) -> Result<&mut T, QueueError<T>> {
    // SAFETY: `head` points to a live node; the borrow is tied to `&mut self`.
    self.head.map(|node| unsafe { &mut (*node.as_ptr()).value }).ok_or(QueueError::Empty)
  }

  fn back(&self) -> Result<&T, QueueError<T>> {
    // SAFETY: `tail` points to a live node; the borrow is tied to `&self`.
    self.tail.map(|node| unsafe { &(*node.as_ptr()).value }).ok_or(QueueError::Empty)
  }

  fn back_mut(&mut self) -> Result<&mut T, QueueError<T>> {
    // SAFETY: `tail` points to a live node; the borrow is tied to `&mut self`.
    self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value }).ok_or(QueueError::Empty)
  }

  fn push(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.push_node(item);
    Ok(OfferOutcome::Enqueued)
  }

  fn pop(&mut self) -> Result<T, QueueError<T>> {
    self.pop_node().ok_or(QueueError::Empty)
  }

  fn clear(&mut self) {
    while self.pop_node().is_some() {}
  }

  fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
  where
    T: 'a, {
    LinkedQueue::iter(self)
  }
}

impl<T> Drop for LinkedQueue<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Default for LinkedQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for LinkedQueue<T> {
  fn clone(&self) -> Self {
    self.iter().cloned().collect()
  }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&QueueDisplay::<T, Self>::new(self, "", " "), f)
  }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> Extend<T> for LinkedQueue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.push_node(item);
    }
  }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.extend(iter);
    queue
  }
}

impl<T> IntoIterator for LinkedQueue<T> {
  type IntoIter = LinkedIntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    LinkedIntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
  type IntoIter = LinkedIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut LinkedQueue<T> {
  type IntoIter = LinkedIterMut<'a, T>;
  type Item = &'a mut T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}
