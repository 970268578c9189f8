//! # nexus-fifo
//!
//! Growable FIFO queue that defers front removal.
//!
//! Popping from the front of a `Vec` shifts every remaining element. This
//! crate's [`Queue`] instead advances a front offset and leaves the removed
//! slot in place. The dead prefix is discarded in one pass once it reaches
//! half of the buffer, so each element is moved at most a constant number of
//! times and removal is amortized O(1).
//!
//! ```text
//!  buffer:  [ dead | dead | live | live | live ]
//!                          ^ offset
//!
//!  offset * 2 >= buffer.len()  =>  drain dead prefix, offset = 0
//! ```
//!
//! Storage stays contiguous, so the live region is a single slice and the
//! queue has no ring arithmetic on the hot path.
//!
//! ## Example
//!
//! ```
//! use nexus_fifo::Queue;
//!
//! let mut queue: Queue<u64> = Queue::new();
//!
//! queue.enqueue(1);
//! queue.enqueue_all([2, 3, 4, 5]);
//! assert_eq!(queue.len(), 5);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.peek(), Some(&2));
//!
//! // Remove two more without taking them
//! assert_eq!(queue.discard_many(2), Some(2));
//! assert_eq!(queue.dequeue(), Some(4));
//! ```
//!
//! ## Complexity
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `enqueue` | O(1) amortized | `Vec` growth |
//! | `dequeue` / `discard` | O(1) amortized | compaction moves at most the live half |
//! | `discard_many(n)` | O(n) for types with drop glue, else O(1) amortized | |
//! | `peek` / `len` / `is_empty` | O(1) | |
//!
//! ## Memory
//!
//! The dead prefix never exceeds the live region. After a compaction the
//! allocation is shrunk when it is more than `shrink_factor` times larger
//! than needed (see [`QueueBuilder`]), so draining a large burst returns
//! memory to the allocator.
//!
//! ## Feature Flags
//!
//! - `log` - Emit compaction and shrink events through the `log` facade
//!
//! The `log` paths have their own tests: `cargo test --features log`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

// Logging compiles away entirely without the `log` feature.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    };
}

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
    };
}

pub mod builder;
pub mod queue;

pub use builder::{BuildError, QueueBuilder};
pub use queue::Queue;
