#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Generic first-in-first-out queue containers.
//!
//! Two implementations share the [`FifoQueue`] abstraction:
//!
//! - [`RingQueue`] keeps its elements in a circular buffer. It either grows on demand, doubling its
//!   storage when full and halving it when less than a quarter full, or keeps a fixed capacity and
//!   applies an [`OverflowPolicy`] when a push does not fit.
//! - [`LinkedQueue`] keeps one heap node per element and never reallocates.
//!
//! Peeking or popping an empty queue fails with [`QueueError::Empty`]; a bounded queue refusing a
//! push fails with [`QueueError::Full`] and hands the element back. The containers are
//! single-threaded and carry no internal synchronization.
//!
//! ```
//! use dsa_queue_rs::{FifoQueue, QueueError, RingQueue};
//!
//! let mut queue = RingQueue::bounded(2);
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! assert_eq!(queue.push(3), Err(QueueError::Full(3)));
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.front(), Ok(&2));
//! ```

extern crate alloc;

pub mod algorithms;
mod fifo_queue;
mod linked_queue;
mod offer_outcome;
mod overflow_policy;
mod queue_config;
mod queue_display;
mod queue_error;
mod queue_size;
mod ring_queue;

pub use fifo_queue::FifoQueue;
pub use linked_queue::{LinkedIntoIter, LinkedIter, LinkedIterMut, LinkedQueue};
pub use offer_outcome::OfferOutcome;
pub use overflow_policy::OverflowPolicy;
pub use queue_config::{DEFAULT_CAPACITY, QueueConfig};
pub use queue_display::QueueDisplay;
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use ring_queue::{RING_QUEUE_TRACE_TARGET, RingIntoIter, RingIter, RingIterMut, RingQueue};
