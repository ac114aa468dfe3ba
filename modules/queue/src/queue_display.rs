
use core::{fmt, marker::PhantomData};

use crate::FifoQueue;

/// Renders a queue as `prefix[e1<separator>e2...]`, front element first.
pub struct QueueDisplay<'a, T, Q: ?Sized> {
  queue:     &'a Q,
  prefix:    &'a str,
  separator: &'a str,
  _marker:   PhantomData<fn() -> T>,
}

impl<'a, T, Q: ?Sized> QueueDisplay<'a, T, Q> {
  /// Creates a display adapter over `queue`.
  #[must_use]
  pub const fn new(queue: &'a Q, prefix: &'a str, separator: &'a str) -> Self {
    Self { queue, prefix, separator, _marker: PhantomData }
  }
}

impl<T, Q> fmt::Display for QueueDisplay<'_, T, Q>
where
  T: fmt::Display,
  Q: FifoQueue<T> + ?Sized,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}[", self.prefix)?;
    for (index, item) in self.queue.iter().enumerate() {
      if index > 0 {
        f.write_str(self.separator)?;
      }
      write!(f, "{item}")?;
    }
    f.write_str("]")
  }
}
