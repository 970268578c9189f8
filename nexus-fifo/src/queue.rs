//! Deferred-compaction FIFO queue.
//!
//! # Design
//!
//! The queue is a `Vec<Option<T>>` plus a front offset:
//!
//! - Slots `[0, offset)` are dead. Values were moved out (or dropped) but the
//!   slots are kept so removal never shifts the buffer.
//! - Slots `[offset, len)` are live and always `Some`.
//!
//! When the offset reaches half of the buffer, the dead prefix is drained in
//! place. Compaction copies at most as many elements as were removed since
//! the previous compaction, which is what makes removal amortized O(1).
//!
//! After every operation `offset == 0 || offset * 2 < buffer.len()`. That
//! makes an empty buffer and an empty queue the same thing, so emptiness is
//! checked against the raw buffer.

use std::fmt;
use std::mem;

use crate::builder::DEFAULT_SHRINK_FACTOR;

/// Allocation size (in slots) below which the buffer is never shrunk.
///
/// Keeps steady enqueue/dequeue churn from freeing and reallocating on
/// every compaction.
pub(crate) const MIN_RETAINED_SLOTS: usize = 32;

/// A growable FIFO queue with lazy front removal.
///
/// Elements are appended at the back and removed from the front. Removal
/// advances an offset rather than shifting the buffer; the dead prefix is
/// reclaimed in bulk once it makes up half of the buffer.
///
/// The element type has no trait bounds.
///
/// # Example
///
/// ```
/// use nexus_fifo::Queue;
///
/// let mut queue = Queue::new();
///
/// queue.enqueue("a");
/// queue.enqueue("b");
/// queue.enqueue("c");
///
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.peek(), Some(&"b"));
/// assert_eq!(queue.len(), 2);
///
/// queue.discard();
/// assert_eq!(queue.dequeue(), Some("c"));
/// assert_eq!(queue.dequeue(), None);
/// assert!(queue.is_empty());
/// ```
pub struct Queue<T> {
    buffer: Vec<Option<T>>,
    offset: usize,
    /// Shrinking never goes below this many slots.
    min_capacity: usize,
    /// `None` keeps the allocation forever.
    shrink_factor: Option<usize>,
}

impl<T> Queue<T> {
    /// Creates an empty queue. Does not allocate.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            offset: 0,
            min_capacity: 0,
            shrink_factor: Some(DEFAULT_SHRINK_FACTOR),
        }
    }

    /// Creates an empty queue with room for at least `capacity` elements.
    ///
    /// The allocation is never shrunk below `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation size overflows `isize::MAX` bytes. Use
    /// [`QueueBuilder`](crate::QueueBuilder) for a fallible version.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            offset: 0,
            min_capacity: capacity,
            shrink_factor: Some(DEFAULT_SHRINK_FACTOR),
        }
    }

    pub(crate) const fn from_parts(
        buffer: Vec<Option<T>>,
        min_capacity: usize,
        shrink_factor: Option<usize>,
    ) -> Self {
        Self {
            buffer,
            offset: 0,
            min_capacity,
            shrink_factor,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        // Equivalent to `len() == 0`: a non-zero offset always leaves more
        // live slots than dead ones.
        self.buffer.is_empty()
    }

    /// Returns the number of slots the buffer can hold without reallocating.
    ///
    /// This includes slots occupied by not-yet-compacted dead elements.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Appends an element to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.buffer.push(Some(item));
    }

    /// Appends every element of `items` to the back of the queue, in order.
    ///
    /// Same result as calling [`enqueue`](Self::enqueue) for each element,
    /// but reserves space once from the iterator's size hint.
    pub fn enqueue_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.buffer.extend(items.into_iter().map(Some));
    }

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }
        let item = self.buffer[self.offset].take();
        self.advance(1);
        item
    }

    /// Removes the front element and drops it.
    ///
    /// Does nothing if the queue is empty.
    #[inline]
    pub fn discard(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.advance(1);
    }

    /// Removes up to `n` elements from the front and drops them.
    ///
    /// Returns the number of elements removed, which is `n` clamped to
    /// [`len`](Self::len). Returns `None` without touching the queue if `n`
    /// is zero or the queue is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_fifo::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue_all([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(queue.discard_many(2), Some(2));
    /// assert_eq!(queue.peek(), Some(&3));
    ///
    /// assert_eq!(queue.discard_many(0), None);
    /// assert_eq!(queue.discard_many(10), Some(3));
    /// assert!(queue.is_empty());
    /// ```
    pub fn discard_many(&mut self, n: usize) -> Option<usize> {
        if n == 0 || self.buffer.is_empty() {
            return None;
        }
        let n = n.min(self.len());
        self.advance(n);
        Some(n)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.buffer.is_empty() {
            return None;
        }
        self.buffer[self.offset].as_ref()
    }

    /// Moves the front past `n` live slots, then compacts if the dead prefix
    /// has reached half of the buffer.
    ///
    /// Caller guarantees `n <= self.len()`.
    #[inline]
    fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.len());

        let start = self.offset;
        self.offset += n;

        if self.offset * 2 >= self.buffer.len() {
            self.compact();
        } else if mem::needs_drop::<T>() {
            // Drop now rather than at the next compaction.
            for slot in &mut self.buffer[start..self.offset] {
                *slot = None;
            }
        }

        debug_assert!(self.offset == 0 || self.offset * 2 < self.buffer.len());
    }

    fn compact(&mut self) {
        let dead = self.offset;
        self.buffer.drain(..dead);
        self.offset = 0;

        trace!(
            "nexus_fifo: compacted {} dead slots, {} live",
            dead,
            self.buffer.len()
        );

        self.shrink_if_sparse();
    }

    fn shrink_if_sparse(&mut self) {
        let Some(factor) = self.shrink_factor else {
            return;
        };

        let target = self
            .buffer
            .len()
            .max(self.min_capacity)
            .max(MIN_RETAINED_SLOTS);
        let capacity = self.buffer.capacity();

        if capacity > target.saturating_mul(factor) {
            self.buffer.shrink_to(target);
            debug!(
                "nexus_fifo: shrunk capacity {} -> {}",
                capacity,
                self.buffer.capacity()
            );
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("len", &self.len())
            .field("offset", &self.offset)
            .field("items", &Live(&self.buffer[self.offset..]))
            .finish_non_exhaustive()
    }
}

/// Formats the live region as a list of values.
struct Live<'a, T>(&'a [Option<T>]);

impl<T: fmt::Debug> fmt::Debug for Live<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().flatten()).finish()
    }
}
