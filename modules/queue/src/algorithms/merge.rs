#[cfg(test)]
mod tests;

use crate::{FifoQueue, QueueError};

/// Merges two queues sorted in ascending order into one sorted queue.
///
/// Ties are taken from `first`, so merging is stable.
///
/// # Errors
///
/// Propagates the first push failure of the merged queue.
pub fn merge<T, Q>(first: Q, second: Q) -> Result<Q, QueueError<T>>
where
  T: PartialOrd,
  Q: FifoQueue<T> + Default, {
  merge_by(first, second, |a, b| a <= b)
}

/// Merges two queues, consuming both.
///
/// At each step the front of `first` is moved to the result when `before(first_front,
/// second_front)` holds, otherwise the front of `second` is. Once either input is exhausted the
/// rest of the other is appended unchanged. When either input is empty the other one is returned
/// as is.
///
/// # Errors
///
/// Propagates the first push failure of the merged queue. Elements not yet moved are dropped with
/// the inputs.
pub fn merge_by<T, Q, F>(mut first: Q, mut second: Q, mut before: F) -> Result<Q, QueueError<T>>
where
  Q: FifoQueue<T> + Default,
  F: FnMut(&T, &T) -> bool, {
  if first.is_empty() {
    return Ok(second);
  }
  if second.is_empty() {
    return Ok(first);
  }

  let mut merged = Q::default();
  loop {
    let take_first = match (first.front(), second.front()) {
      | (Ok(a), Ok(b)) => before(a, b),
      | _ => break,
    };
    let item = if take_first { first.pop()? } else { second.pop()? };
    merged.push(item)?;
  }

  let mut rest = if first.is_empty() { second } else { first };
  while let Ok(item) = rest.pop() {
    merged.push(item)?;
  }
  Ok(merged)
}

/// Merges clones of two queues, leaving the inputs untouched.
///
/// # Errors
///
/// Same as [`merge_by`].
pub fn merged_by<T, Q, F>(first: &Q, second: &Q, before: F) -> Result<Q, QueueError<T>>
where
  Q: FifoQueue<T> + Default + Clone,
  F: FnMut(&T, &T) -> bool, {
  merge_by(first.clone(), second.clone(), before)
}
