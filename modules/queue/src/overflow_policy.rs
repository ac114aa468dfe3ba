/// Policy describing how a ring queue handles a push when every slot is occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Double the backing storage and keep accepting elements.
  #[default]
  Grow,
  /// Refuse the new element with [`QueueError::Full`](crate::QueueError::Full).
  Reject,
  /// Evict the front element to make room for the new one.
  DropOldest,
  /// Discard the new element and keep the queue unchanged.
  DropNewest,
}

impl OverflowPolicy {
  /// Returns `true` when the queue capacity is allowed to change.
  #[must_use]
  pub const fn is_dynamic(self) -> bool {
    matches!(self, Self::Grow)
  }
}
