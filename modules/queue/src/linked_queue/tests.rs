use alloc::{rc::Rc, string::String, vec, vec::Vec};
use core::cell::RefCell;

use super::LinkedQueue;
use crate::{FifoQueue, OfferOutcome, QueueError, QueueSize};

#[test]
fn empty_queue_rejects_peek_and_pop() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  assert!(queue.is_empty());
  assert_eq!(queue.front(), Err(QueueError::Empty));
  assert_eq!(queue.back(), Err(QueueError::Empty));
  assert_eq!(queue.pop(), Err(QueueError::Empty));
}

#[test]
fn push_peek_pop_idiom_works() {
  let mut queue = LinkedQueue::new();
  assert_eq!(queue.push(1).unwrap(), OfferOutcome::Enqueued);
  assert_eq!(queue.front(), Ok(&1));
  assert_eq!(queue.back(), Ok(&1));

  queue.push(2).unwrap();
  queue.push(3).unwrap();
  assert_eq!(queue.len(), 3);
  assert_eq!(queue.front(), Ok(&1));
  assert_eq!(queue.back(), Ok(&3));

  assert_eq!(queue.pop(), Ok(1));
  assert_eq!(queue.front(), Ok(&2));
  assert_eq!(queue.len(), 2);

  assert_eq!(queue.pop(), Ok(2));
  assert_eq!(queue.pop(), Ok(3));
  assert!(queue.is_empty());
  assert_eq!(queue.back(), Err(QueueError::Empty));
  assert_eq!(queue.pop(), Err(QueueError::Empty));
}

#[test]
fn queue_is_reusable_after_draining() {
  let mut queue = LinkedQueue::new();
  queue.push('a').unwrap();
  queue.pop().unwrap();
  queue.push('b').unwrap();
  queue.push('c').unwrap();
  assert_eq!(queue.front(), Ok(&'b'));
  assert_eq!(queue.back(), Ok(&'c'));
}

#[test]
fn capacity_is_limitless() {
  let queue: LinkedQueue<u8> = LinkedQueue::default();
  assert_eq!(queue.capacity(), QueueSize::Limitless);
}

#[test]
fn peek_mut_and_iter_mut_update_in_place() {
  let mut queue: LinkedQueue<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
  queue.front_mut().unwrap().push('!');
  queue.back_mut().unwrap().push('?');
  for item in queue.iter_mut() {
    item.push('.');
  }
  let rendered: Vec<&str> = queue.iter().map(String::as_str).collect();
  assert_eq!(rendered, vec!["a!.", "b.", "c?."]);
}

#[test]
fn iter_is_restartable_and_exact() {
  let queue: LinkedQueue<i32> = (1..=3).collect();
  let iter = queue.iter();
  assert_eq!(iter.len(), 3);
  assert_eq!(iter.clone().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!((&queue).into_iter().sum::<i32>(), 6);
  assert_eq!(queue.len(), 3);
}

#[test]
fn into_iter_drains_front_to_back() {
  let queue: LinkedQueue<i32> = (1..=4).collect();
  let mut iter = queue.into_iter();
  assert_eq!(iter.next(), Some(1));
  assert_eq!(iter.len(), 3);
  assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn clone_is_deep_and_independent() {
  let original: LinkedQueue<Vec<u8>> = [vec![1], vec![2]].into_iter().collect();
  let mut copy = original.clone();
  copy.front_mut().unwrap().push(9);
  copy.push(vec![3]).unwrap();

  assert_eq!(original.front(), Ok(&vec![1]));
  assert_eq!(original.len(), 2);
  assert_eq!(copy.front(), Ok(&vec![1, 9]));
  assert_eq!(copy.len(), 3);
  assert_ne!(original, copy);
}

#[test]
fn extend_appends_at_back() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.extend([1, 2]);
  queue.extend(vec![3]);
  assert_eq!(queue, (1..=3).collect::<LinkedQueue<i32>>());
}

#[test]
fn clear_and_drop_release_elements_front_to_back() {
  #[derive(Debug)]
  struct Tracked {
    id:  u8,
    log: Rc<RefCell<Vec<u8>>>,
  }

  impl Drop for Tracked {
    fn drop(&mut self) {
      self.log.borrow_mut().push(self.id);
    }
  }

  let log = Rc::new(RefCell::new(Vec::new()));
  let mut queue = LinkedQueue::new();
  for id in 0..3 {
    queue.push(Tracked { id, log: Rc::clone(&log) }).unwrap();
  }
  queue.clear();
  assert!(queue.is_empty());
  assert_eq!(*log.borrow(), vec![0, 1, 2]);

  for id in 3..5 {
    queue.push(Tracked { id, log: Rc::clone(&log) }).unwrap();
  }
  drop(queue);
  assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn dropping_a_long_queue_does_not_recurse() {
  let queue: LinkedQueue<u32> = (0..200_000).collect();
  assert_eq!(queue.len(), 200_000);
  drop(queue);
}

#[test]
fn debug_lists_elements() {
  let queue: LinkedQueue<&str> = ["x", "y"].into_iter().collect();
  assert_eq!(alloc::format!("{queue:?}"), "[\"x\", \"y\"]");
}
