use alloc::{vec, vec::Vec};

use super::{merge, merge_by, merged_by};
use crate::{FifoQueue, LinkedQueue, QueueError, RingQueue};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Job {
  time_id:  u32,
  priority: u32,
  name:     &'static str,
}

const fn job(time_id: u32, priority: u32, name: &'static str) -> Job {
  Job { time_id, priority, name }
}

fn runs_before(a: &Job, b: &Job) -> bool {
  if a.time_id == b.time_id { a.priority > b.priority } else { a.time_id < b.time_id }
}

#[test]
fn merges_sorted_queues() {
  let first: RingQueue<i32> = [1, 4, 6].into_iter().collect();
  let second: RingQueue<i32> = [2, 3, 5, 7].into_iter().collect();
  let merged = merge(first, second).unwrap();
  assert_eq!(merged.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn merge_with_an_empty_queue_returns_the_other() {
  let first: LinkedQueue<i32> = [1, 2].into_iter().collect();
  let merged = merge(first, LinkedQueue::new()).unwrap();
  assert_eq!(merged.into_iter().collect::<Vec<_>>(), vec![1, 2]);

  let second: LinkedQueue<i32> = [3].into_iter().collect();
  let merged = merge(LinkedQueue::new(), second).unwrap();
  assert_eq!(merged.front(), Ok(&3));
}

#[test]
fn merge_is_stable_on_ties() {
  let first: LinkedQueue<(u8, char)> = [(1, 'a'), (2, 'a')].into_iter().collect();
  let second: LinkedQueue<(u8, char)> = [(1, 'b'), (2, 'b')].into_iter().collect();
  let merged = merge_by(first, second, |a, b| a.0 <= b.0).unwrap();
  let labels: Vec<char> = merged.iter().map(|(_, label)| *label).collect();
  assert_eq!(labels, vec!['a', 'b', 'a', 'b']);
}

#[test]
fn merges_job_queues_by_time_then_priority() {
  let first: RingQueue<Job> =
    [job(2, 1, "M"), job(3, 0, "E"), job(5, 2, "Q"), job(9, 1, "A")].into_iter().collect();
  let second: RingQueue<Job> =
    [job(1, 0, "D"), job(4, 0, "T"), job(5, 1, "V"), job(7, 0, "B"), job(8, 1, "H"), job(10, 1, "R")]
      .into_iter()
      .collect();

  let merged = merge_by(first, second, runs_before).unwrap();
  let names: Vec<&str> = merged.iter().map(|job| job.name).collect();
  assert_eq!(names, vec!["D", "M", "E", "T", "Q", "V", "B", "H", "A", "R"]);
}

#[test]
fn merged_by_leaves_inputs_untouched() {
  let first: LinkedQueue<i32> = [1, 3].into_iter().collect();
  let second: LinkedQueue<i32> = [2].into_iter().collect();
  let merged = merged_by(&first, &second, |a, b| a <= b).unwrap();
  assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!(first.len(), 2);
  assert_eq!(second.len(), 1);
}

#[test]
fn merge_propagates_push_failures() {
  #[derive(Clone, Default)]
  struct TinyQueue(RingQueue<i32>);

  impl FifoQueue<i32> for TinyQueue {
    fn len(&self) -> usize {
      self.0.len()
    }

    fn capacity(&self) -> crate::QueueSize {
      self.0.capacity()
    }

    fn front(&self) -> Result<&i32, QueueError<i32>> {
      self.0.front()
    }

    fn front_mut(&mut self) -> Result<&mut i32, QueueError<i32>> {
      self.0.front_mut()
    }

    fn back(&self) -> Result<&i32, QueueError<i32>> {
      self.0.back()
    }

    fn back_mut(&mut self) -> Result<&mut i32, QueueError<i32>> {
      self.0.back_mut()
    }

    fn push(&mut self, item: i32) -> Result<crate::OfferOutcome, QueueError<i32>> {
      if self.0.len() == 2 {
        return Err(QueueError::Full(item));
      }
      self.0.push(item)
    }

    fn pop(&mut self) -> Result<i32, QueueError<i32>> {
      self.0.pop()
    }

    fn clear(&mut self) {
      self.0.clear();
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a i32>
    where
      i32: 'a, {
      self.0.iter()
    }
  }

  let mut first = TinyQueue::default();
  first.push(1).unwrap();
  first.push(3).unwrap();
  let mut second = TinyQueue::default();
  second.push(2).unwrap();

  assert_eq!(merge(first, second).err(), Some(QueueError::Full(3)));
}
