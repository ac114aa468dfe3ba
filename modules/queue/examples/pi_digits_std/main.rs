//! Queues up the leading digits of pi in a growable ring queue.
//!
//! Shows the storage doubling while digits are pushed, halving while they are popped, and the
//! errors raised when peeking at or popping from an empty queue.
//!
//! Usage: `cargo run --example pi_digits_std -- <num_digits>`

use std::{env, f64::consts::PI, process::ExitCode};

use anyhow::{Context, Result, bail};
use dsa_queue_rs::{FifoQueue, QueueError, RingQueue};

fn parse_digit_count() -> Result<usize> {
  let mut args = env::args();
  let executable = args.next().unwrap_or_else(|| String::from("pi_digits_std"));
  let Some(raw) = args.next() else {
    bail!("USAGE: {executable} <num_digits>");
  };
  raw.parse().with_context(|| format!("<num_digits> must be a non-negative integer, got {raw:?}"))
}

fn run(num_digits: usize) -> Result<()> {
  let mut queue: RingQueue<u64> = RingQueue::with_capacity(2);
  println!("Queuing up the first {num_digits} significant digits of pi...\n");
  println!("queue created :: size: {} | cap: {}\n", queue.len(), queue.capacity());

  println!("Cannot peek the front element of the queue when empty");
  if let Err(error) = queue.front() {
    println!("QueueError: {error}\n");
  }

  let mut x = PI;
  for _ in 0..num_digits {
    let digit = (x as u64) % 10;
    x *= 10.0;
    queue.push(digit)?;
    println!(
      "queue.push({digit}) :: front: {} | size: {} | cap: {}",
      queue.front()?,
      queue.len(),
      queue.capacity()
    );
  }
  println!();

  println!("queue.iter() ::");
  for (index, digit) in queue.iter().enumerate() {
    println!("queue[{index}]: {digit}");
  }
  println!();

  while let Ok(front) = queue.front() {
    println!("front: {front} | size: {} | cap: {} -- queue.pop()", queue.len(), queue.capacity());
    queue.pop()?;
  }
  println!("\nsize: {} | cap: {}", queue.len(), queue.capacity());

  match queue.pop() {
    | Err(error @ QueueError::Empty) => {
      println!("QueueError: {error}");
      Ok(())
    },
    | Err(error) => Err(error.into()),
    | Ok(digit) => bail!("popped {digit} from a drained queue"),
  }
}

fn main() -> ExitCode {
  let result = parse_digit_count().and_then(run);
  match result {
    | Ok(()) => ExitCode::SUCCESS,
    | Err(error) => {
      eprintln!("{error:#}");
      ExitCode::FAILURE
    },
  }
}
