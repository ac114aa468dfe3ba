use core::fmt;


/// Capacity reported by [`FifoQueue::capacity`](crate::FifoQueue::capacity).
///
/// A ring queue reports the slots it has allocated right now, which moves as a growable queue
/// resizes. A linked queue allocates one node per element and has no such bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// Node-based storage without a slot count.
  Limitless,
  /// Number of slots currently backing the queue.
  Limited(usize),
}

impl QueueSize {
  /// Returns `true` when `len` elements fit without resizing or overflowing.
  #[must_use]
  pub const fn fits(self, len: usize) -> bool {
    match self {
      | Self::Limited(slots) => len <= slots,
      | Self::Limitless => true,
    }
  }
}

impl fmt::Display for QueueSize {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Limited(slots) => write!(f, "{slots}"),
      | Self::Limitless => f.write_str("unbounded"),
    }
  }
}
