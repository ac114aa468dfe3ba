//! Ring-buffer queue with growable or fixed capacity.

mod ring_into_iter;
mod ring_iter;
mod ring_iter_mut;

use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::{cmp, fmt, iter};

pub use ring_into_iter::RingIntoIter;
pub use ring_iter::RingIter;
pub use ring_iter_mut::RingIterMut;
use tracing::{debug, trace, warn};

use crate::{FifoQueue, OfferOutcome, OverflowPolicy, QueueConfig, QueueDisplay, QueueError, QueueSize};

/// `tracing` target used for storage resize and overflow events.
pub const RING_QUEUE_TRACE_TARGET: &str = "dsa_queue::ring_queue";

/// FIFO queue stored in a contiguous circular buffer.
///
/// Live elements occupy `len` consecutive slots starting at `head`, wrapping around the end of the
/// buffer. What happens when every slot is taken is decided by the configured
/// [`OverflowPolicy`]: growable queues double their storage (amortized O(1) push) and halve it again
/// once less than a quarter of the slots are in use, bounded queues reject or drop elements.
#[derive(Clone)]
pub struct RingQueue<T> {
  slots:  Box<[Option<T>]>,
  head:   usize,
  len:    usize,
  config: QueueConfig,
}

impl<T> RingQueue<T> {
  /// Creates a growable queue with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(QueueConfig::default())
  }

  /// Creates a growable queue with `capacity` slots allocated up front.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_config(QueueConfig::dynamic(capacity))
  }

  /// Creates a fixed-capacity queue that fails with [`QueueError::Full`] once `capacity` elements
  /// are stored.
  #[must_use]
  pub fn bounded(capacity: usize) -> Self {
    Self::with_config(QueueConfig::fixed(capacity))
  }

  /// Creates a queue from an explicit configuration.
  #[must_use]
  pub fn with_config(config: QueueConfig) -> Self {
    let slots = iter::repeat_with(|| None).take(config.initial_capacity()).collect();
    Self { slots, head: 0, len: 0, config }
  }

  /// Returns the number of slots currently allocated.
  #[must_use]
  pub fn slot_capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns `true` when every slot is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.slots.len()
  }

  /// Returns the overflow policy applied when the queue is full.
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.config.overflow_policy()
  }

  /// Returns the configuration the queue was created with.
  #[must_use]
  pub const fn config(&self) -> &QueueConfig {
    &self.config
  }

  /// Iterates over shared references front-to-back.
  #[must_use]
  pub fn iter(&self) -> RingIter<'_, T> {
    let (front, back) = self.as_slices();
    RingIter::new(front, back, self.len)
  }

  /// Iterates over mutable references front-to-back.
  #[must_use]
  pub fn iter_mut(&mut self) -> RingIterMut<'_, T> {
    let len = self.len;
    let (front, back) = self.as_mut_slices();
    RingIterMut::new(front, back, len)
  }

  fn slot_index(&self, offset: usize) -> usize {
    let index = self.head + offset;
    if index >= self.slots.len() { index - self.slots.len() } else { index }
  }

  fn as_slices(&self) -> (&[Option<T>], &[Option<T>]) {
    if self.len == 0 {
      return (&[], &[]);
    }
    let capacity = self.slots.len();
    let end = self.head + self.len;
    if end <= capacity {
      (&self.slots[self.head..end], &[])
    } else {
      (&self.slots[self.head..], &self.slots[..end - capacity])
    }
  }

  fn as_mut_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
    if self.len == 0 {
      return (&mut [], &mut []);
    }
    let capacity = self.slots.len();
    let end = self.head + self.len;
    if end <= capacity {
      (&mut self.slots[self.head..end], &mut [])
    } else {
      let (wrapped, tail) = self.slots.split_at_mut(self.head);
      (tail, &mut wrapped[..end - capacity])
    }
  }

  fn write_back(&mut self, item: T) {
    debug_assert!(self.capacity().fits(self.len + 1));
    let index = self.slot_index(self.len);
    self.slots[index] = Some(item);
    self.len += 1;
  }

  fn take_front(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }
    let item = self.slots[self.head].take();
    self.head = self.slot_index(1);
    self.len -= 1;
    item
  }

  fn take_back(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }
    let index = self.slot_index(self.len - 1);
    self.len -= 1;
    self.slots[index].take()
  }

  fn allocate_slots(capacity: usize) -> Result<Box<[Option<T>]>, TryReserveError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
  }

  /// Moves the live elements, front first, into a fresh buffer of `capacity` slots.
  fn relocate(&mut self, capacity: usize) -> Result<(), TryReserveError> {
    debug_assert!(capacity >= self.len);
    let mut slots = Self::allocate_slots(capacity)?;
    for (offset, slot) in slots.iter_mut().take(self.len).enumerate() {
      let index = self.slot_index(offset);
      *slot = self.slots[index].take();
    }
    self.slots = slots;
    self.head = 0;
    Ok(())
  }

  fn handle_full_queue(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    let outcome = match self.config.overflow_policy() {
      | OverflowPolicy::Grow => return self.handle_grow_policy(item),
      | OverflowPolicy::Reject => return Err(QueueError::Full(item)),
      | OverflowPolicy::DropOldest if !self.slots.is_empty() => {
        drop(self.take_front());
        self.write_back(item);
        OfferOutcome::DroppedOldest { count: 1 }
      },
      | OverflowPolicy::DropOldest | OverflowPolicy::DropNewest => {
        drop(item);
        OfferOutcome::DroppedNewest { count: 1 }
      },
    };
    let label: &'static str = (&outcome).into();
    trace!(target: RING_QUEUE_TRACE_TARGET, capacity = self.slots.len(), outcome = label, "overflow policy dropped an element");
    Ok(outcome)
  }

  fn handle_grow_policy(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    let current = self.slots.len();
    let next = cmp::max(1, current.saturating_mul(2));
    if next <= current {
      warn!(target: RING_QUEUE_TRACE_TARGET, capacity = current, "ring queue cannot grow any further");
      return Err(QueueError::AllocError(item));
    }
    if self.relocate(next).is_err() {
      warn!(target: RING_QUEUE_TRACE_TARGET, from = current, to = next, "failed to grow ring queue storage");
      return Err(QueueError::AllocError(item));
    }
    debug!(target: RING_QUEUE_TRACE_TARGET, from = current, to = next, len = self.len, "ring queue storage grew");
    self.write_back(item);
    Ok(OfferOutcome::GrewTo { capacity: next })
  }

  fn shrink_if_sparse(&mut self) {
    if !self.config.shrinks() {
      return;
    }
    let current = self.slots.len();
    if current < 2 || self.len.saturating_mul(4) >= current {
      return;
    }
    let next = current / 2;
    match self.relocate(next) {
      | Ok(()) => {
        debug!(target: RING_QUEUE_TRACE_TARGET, from = current, to = next, len = self.len, "ring queue storage shrank");
      },
      | Err(_) => {
        debug!(target: RING_QUEUE_TRACE_TARGET, from = current, to = next, "skipped shrinking ring queue storage");
      },
    }
  }
}

impl<T> FifoQueue<T> for RingQueue<T> {
  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::Limited(self.slots.len())
  }

  fn front(&self) -> Result<&T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    self.slots[self.head].as_ref().ok_or(QueueError::Empty)
  }

  fn front_mut(&mut self) -> Result<&mut T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    self.slots[self.head].as_mut().ok_or(QueueError::Empty)
  }

  fn back(&self) -> Result<&T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    self.slots[self.slot_index(self.len - 1)].as_ref().ok_or(QueueError::Empty)
  }

  fn back_mut(&mut self) -> Result<&mut T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    let index = self.slot_index(self.len - 1);
    self.slots[index].as_mut().ok_or(QueueError::Empty)
  }

  fn push(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    if self.is_full() {
      return self.handle_full_queue(item);
    }
    self.write_back(item);
    Ok(OfferOutcome::Enqueued)
  }

  fn pop(&mut self) -> Result<T, QueueError<T>> {
    let Some(item) = self.take_front() else {
      return Err(QueueError::Empty);
    };
    self.shrink_if_sparse();
    Ok(item)
  }

  fn clear(&mut self) {
    while self.take_front().is_some() {}
    self.head = 0;
  }

  fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
  where
    T: 'a, {
    RingQueue::iter(self)
  }
}

impl<T> Default for RingQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for RingQueue<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: fmt::Display> fmt::Display for RingQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&QueueDisplay::<T, Self>::new(self, "", " "), f)
  }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T> FromIterator<T> for RingQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let slots: Box<[Option<T>]> = iter.into_iter().map(Some).collect();
    let len = slots.len();
    Self { slots, head: 0, len, config: QueueConfig::dynamic(len) }
  }
}

impl<T> IntoIterator for RingQueue<T> {
  type IntoIter = RingIntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    RingIntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
  type IntoIter = RingIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut RingQueue<T> {
  type IntoIter = RingIterMut<'a, T>;
  type Item = &'a mut T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}
