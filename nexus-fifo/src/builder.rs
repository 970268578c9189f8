//! Construction-time configuration for [`Queue`].
//!
//! # Example
//!
//! ```
//! use nexus_fifo::{Queue, QueueBuilder};
//!
//! // Pre-allocate and never release memory
//! let queue: Queue<u64> = QueueBuilder::default()
//!     .capacity(4096)
//!     .retain_capacity()
//!     .build()?;
//! assert!(queue.capacity() >= 4096);
//!
//! // Release memory more eagerly after a burst drains
//! let eager: Queue<u64> = QueueBuilder::default().shrink_factor(2).build()?;
//! assert!(eager.is_empty());
//! # Ok::<(), nexus_fifo::BuildError>(())
//! ```

use crate::Queue;

pub(crate) const DEFAULT_SHRINK_FACTOR: usize = 4;
const MIN_SHRINK_FACTOR: usize = 2;

// =============================================================================
// Errors
// =============================================================================

/// Error during queue construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Shrink factor below 2. The queue would shrink on nearly every
    /// compaction and regrow on the next enqueue.
    ShrinkFactorTooSmall {
        /// The rejected factor.
        factor: usize,
    },
    /// Pre-allocation failed, or the requested capacity overflows.
    AllocationFailed,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShrinkFactorTooSmall { factor } => {
                write!(
                    f,
                    "shrink factor ({factor}) must be at least {MIN_SHRINK_FACTOR}"
                )
            }
            Self::AllocationFailed => write!(f, "memory allocation failed"),
        }
    }
}

impl std::error::Error for BuildError {}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Queue`].
///
/// Defaults match [`Queue::new`]: no pre-allocation, shrink factor 4.
#[derive(Clone, Debug)]
pub struct QueueBuilder {
    capacity: usize,
    shrink_factor: Option<usize>,
}

impl Default for QueueBuilder {
    fn default() -> Self {
        Self {
            capacity: 0,
            shrink_factor: Some(DEFAULT_SHRINK_FACTOR),
        }
    }
}

impl QueueBuilder {
    /// Pre-allocate room for at least this many elements.
    /// The queue can grow beyond this, and never shrinks below it.
    #[must_use]
    pub const fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Shrink the allocation after compaction when it exceeds `factor` times
    /// the space needed. Default: 4. Must be at least 2.
    #[must_use]
    pub const fn shrink_factor(mut self, factor: usize) -> Self {
        self.shrink_factor = Some(factor);
        self
    }

    /// Never shrink the allocation. Capacity only grows.
    #[must_use]
    pub const fn retain_capacity(mut self) -> Self {
        self.shrink_factor = None;
        self
    }

    /// Build the queue.
    ///
    /// # Errors
    ///
    /// - [`BuildError::ShrinkFactorTooSmall`] if the shrink factor is below 2
    /// - [`BuildError::AllocationFailed`] if pre-allocation fails
    pub fn build<T>(self) -> Result<Queue<T>, BuildError> {
        if let Some(factor) = self.shrink_factor.filter(|&f| f < MIN_SHRINK_FACTOR) {
            return Err(BuildError::ShrinkFactorTooSmall { factor });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(self.capacity)
            .map_err(|_| BuildError::AllocationFailed)?;

        debug!(
            "nexus_fifo: built queue, capacity={} shrink_factor={:?}",
            buffer.capacity(),
            self.shrink_factor
        );

        Ok(Queue::from_parts(buffer, self.capacity, self.shrink_factor))
    }
}
