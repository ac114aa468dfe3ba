//! Construction-time configuration for ring queues.


use crate::OverflowPolicy;

/// Initial number of slots allocated by [`RingQueue::new`](crate::RingQueue::new).
pub const DEFAULT_CAPACITY: usize = 4096;

/// Configuration applied when a [`RingQueue`](crate::RingQueue) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfig {
  initial_capacity: usize,
  overflow_policy:  OverflowPolicy,
  shrink:           bool,
}

impl QueueConfig {
  /// Creates a new configuration.
  #[must_use]
  pub const fn new(initial_capacity: usize, overflow_policy: OverflowPolicy, shrink: bool) -> Self {
    Self { initial_capacity, overflow_policy, shrink }
  }

  /// Growable queue starting with `initial_capacity` slots.
  #[must_use]
  pub const fn dynamic(initial_capacity: usize) -> Self {
    Self::new(initial_capacity, OverflowPolicy::Grow, true)
  }

  /// Fixed-capacity queue that rejects pushes once `capacity` elements are stored.
  #[must_use]
  pub const fn fixed(capacity: usize) -> Self {
    Self::new(capacity, OverflowPolicy::Reject, false)
  }

  /// Overrides the initial capacity.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Overrides the overflow policy.
  #[must_use]
  pub const fn with_overflow_policy(mut self, overflow_policy: OverflowPolicy) -> Self {
    self.overflow_policy = overflow_policy;
    self
  }

  /// Enables or disables halving the storage once it drops below a quarter full.
  ///
  /// Only growable queues shrink.
  #[must_use]
  pub const fn with_shrink(mut self, shrink: bool) -> Self {
    self.shrink = shrink;
    self
  }

  /// Returns the number of slots allocated up front.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Returns the overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.overflow_policy
  }

  /// Returns `true` when the storage may shrink after pops.
  #[must_use]
  pub const fn shrinks(&self) -> bool {
    self.shrink && self.overflow_policy.is_dynamic()
  }
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self::dynamic(DEFAULT_CAPACITY)
  }
}
