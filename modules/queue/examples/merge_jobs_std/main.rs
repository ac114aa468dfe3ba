//! Merges two time-ordered job queues into one schedule.

use std::fmt;

use anyhow::Result;
use dsa_queue_rs::{FifoQueue, RingQueue, algorithms::merge_by};

#[derive(Clone, Debug)]
struct Job {
  time_id:  u32,
  priority: u32,
  name:     String,
}

impl Job {
  fn new(time_id: u32, priority: u32, name: &str) -> Self {
    Self { time_id, priority, name: name.to_owned() }
  }
}

impl fmt::Display for Job {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Job(name={}, time_id={}, priority={})", self.name, self.time_id, self.priority)
  }
}

/// Earlier time first; on equal time the higher priority runs first.
fn runs_before(a: &Job, b: &Job) -> bool {
  if a.time_id == b.time_id { a.priority > b.priority } else { a.time_id < b.time_id }
}

fn main() -> Result<()> {
  let mut first = RingQueue::new();
  for job in [Job::new(2, 1, "M"), Job::new(3, 0, "E"), Job::new(5, 2, "Q"), Job::new(9, 1, "A")] {
    first.push(job)?;
  }
  println!("{}\n", first.display("q1", "\n"));

  let mut second = RingQueue::new();
  for job in [
    Job::new(1, 0, "D"),
    Job::new(4, 0, "T"),
    Job::new(5, 1, "V"),
    Job::new(7, 0, "B"),
    Job::new(8, 1, "H"),
    Job::new(10, 1, "R"),
  ] {
    second.push(job)?;
  }
  println!("{}\n", second.display("q2", "\n"));

  let merged = merge_by(first, second, runs_before)?;
  println!("Merging...");
  println!("{}", merged.display("q", "\n"));
  Ok(())
}
