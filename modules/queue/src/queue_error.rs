#[cfg(test)]
mod tests;

/// Errors reported by queue operations.
///
/// Variants raised while inserting hand the rejected element back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError<T> {
  /// The queue holds no element to peek at or remove.
  #[error("invalid operation on an empty queue")]
  Empty,
  /// A bounded queue is at capacity and its overflow policy rejects new elements. Contains the
  /// element that was offered.
  #[error("queue capacity exceeded")]
  Full(T),
  /// Growing the backing storage failed. Contains the element that was offered.
  #[error("failed to allocate queue storage")]
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Extracts the element carried by the variants that preserve it on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::AllocError(item) => Some(item),
      | Self::Empty => None,
    }
  }
}
