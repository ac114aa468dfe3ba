
/// Outcome of a successful push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The element was enqueued without any side effects.
  Enqueued,
  /// The element was enqueued after evicting the oldest elements.
  DroppedOldest {
    /// Number of elements removed from the front of the queue.
    count: usize,
  },
  /// The offered element was discarded because the queue was full.
  DroppedNewest {
    /// Number of offered elements dropped without enqueuing.
    count: usize,
  },
  /// The backing storage grew to the specified capacity before enqueuing.
  GrewTo {
    /// New capacity after the storage has grown.
    capacity: usize,
  },
}

impl OfferOutcome {
  /// Returns `true` when the offered element is now stored in the queue.
  #[must_use]
  pub const fn is_stored(&self) -> bool {
    !matches!(self, Self::DroppedNewest { .. })
  }
}

impl From<&OfferOutcome> for &'static str {
  fn from(outcome: &OfferOutcome) -> Self {
    match outcome {
      | OfferOutcome::Enqueued => "enqueue",
      | OfferOutcome::DroppedOldest { .. } => "drop_oldest",
      | OfferOutcome::DroppedNewest { .. } => "drop_newest",
      | OfferOutcome::GrewTo { .. } => "grow",
    }
  }
}
