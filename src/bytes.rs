//! Byte-record queue with a runtime-configured record width.
//!
//! Records are opaque fixed-width byte payloads stored as a dense array
//! in a single heap slab of `capacity * record_size` bytes, with no
//! header or metadata interleaved between records. Use this type when the
//! record width is only known at initialization time; when the record is
//! a Rust type, [`Queue`](crate::Queue) fixes the width at compile time
//! instead.
//!
//! # Invariants
//! - `count <= capacity`, and `count` is the sole source of truth for
//!   empty/full (`write_index == read_index` is ambiguous between the
//!   two).
//! - `write_index` and `read_index` stay in `[0, capacity)`; all movement
//!   goes through the shared `advance`/`retreat` helpers.
//! - A failing operation leaves indices, count, and storage bytes exactly
//!   as they were.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use crate::cfg::{Discipline, QueueCfg};
use crate::error::{QueueError, QueueResult};
use crate::index;

/// Fixed-capacity queue of fixed-width byte records.
///
/// Supports FIFO and LIFO access over the same storage, selected at
/// construction via [`QueueCfg`]. All operations complete in bounded
/// constant time with no suspension points.
///
/// # Concurrency
///
/// The queue performs no internal locking: every mutating operation takes
/// `&mut self`, so unsynchronized shared mutation is rejected at compile
/// time. When one queue must be shared between independent execution
/// contexts (the canonical case is an interrupt handler pushing while the
/// main flow pops), the caller is responsible for mutual exclusion around
/// every operation: for example, a critical section that masks the interrupt. A
/// mutex alone does not help an interrupt handler; disabling the
/// interrupt source does.
///
/// # Examples
/// ```rust
/// use recq::{ByteQueue, Discipline, QueueCfg};
///
/// let cfg = QueueCfg {
///     capacity: 4,
///     discipline: Discipline::Fifo,
///     overwrite: false,
/// };
/// let mut q = ByteQueue::new(8, &cfg)?;
///
/// assert!(q.push(&[1, 2, 3, 4, 5, 6, 7, 8]));
///
/// let mut out = [0u8; 8];
/// assert!(q.pop(&mut out));
/// assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
/// # Ok::<(), recq::QueueError>(())
/// ```
#[derive(Debug)]
pub struct ByteQueue {
    cfg: QueueCfg,
    record_size: usize,
    storage: Box<[u8]>,
    write_index: usize,
    read_index: usize,
    count: usize,
}

impl ByteQueue {
    /// Creates an empty queue of `capacity` records, each `record_size`
    /// bytes wide.
    ///
    /// Allocates the backing store eagerly. Returns
    /// [`QueueError::InvalidConfig`] when `record_size` is zero, the
    /// configuration fails [`QueueCfg::validate`], or the total byte size
    /// overflows `usize`; returns [`QueueError::AllocationFailed`] when
    /// the allocator cannot provide the store. On error no queue value
    /// exists, so there is no partially-initialized state to retire;
    /// retry by calling `new` again.
    pub fn new(record_size: usize, cfg: &QueueCfg) -> QueueResult<Self> {
        cfg.validate().map_err(QueueError::invalid_config)?;
        if record_size == 0 {
            return Err(QueueError::invalid_config("record size must be > 0"));
        }
        let bytes = cfg
            .capacity
            .checked_mul(record_size)
            .ok_or_else(|| QueueError::invalid_config("capacity * record_size overflows usize"))?;

        let mut buf: Vec<u8> = Vec::new();
        if buf.try_reserve_exact(bytes).is_err() {
            return Err(QueueError::allocation_failed(bytes, "queue backing store"));
        }
        buf.resize(bytes, 0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Created {} byte queue: {} records x {} bytes",
            cfg.discipline.name(),
            cfg.capacity,
            record_size
        );

        Ok(Self {
            cfg: cfg.clone(),
            record_size,
            storage: buf.into_boxed_slice(),
            write_index: 0,
            read_index: 0,
            count: 0,
        })
    }

    /// Returns the number of records currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true when `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.count == self.cfg.capacity
    }

    /// Returns how many more records fit before the queue is full.
    pub fn remaining(&self) -> usize {
        self.cfg.capacity - self.count
    }

    /// Returns the maximum number of records.
    pub fn capacity(&self) -> usize {
        self.cfg.capacity
    }

    /// Returns the fixed byte width of every record.
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Returns the total backing-store size in bytes.
    pub fn storage_bytes(&self) -> usize {
        self.storage.len()
    }

    /// Returns the access discipline the queue was built with.
    pub fn discipline(&self) -> Discipline {
        self.cfg.discipline
    }

    /// Pushes a record, returning false when the queue is full and
    /// overwrite is disabled.
    ///
    /// On a full queue with overwrite enabled the push succeeds: FIFO
    /// evicts the oldest record (the read side advances past the slot
    /// that was just overwritten), while LIFO replaces the most recent
    /// write slot and leaves the rest of the stack intact; the replaced
    /// record is permanently lost. Either way `len()` stays at capacity.
    ///
    /// A failed push copies nothing and changes no state.
    ///
    /// # Panics
    /// Panics if `record.len()` differs from [`record_size`](Self::record_size).
    pub fn push(&mut self, record: &[u8]) -> bool {
        assert_eq!(
            record.len(),
            self.record_size,
            "record length must equal the queue's record size"
        );

        if !self.is_full() {
            let span = self.record_span(self.write_index);
            self.storage[span].copy_from_slice(record);
            self.write_index = index::advance(self.write_index, self.cfg.capacity);
            self.count += 1;
            return true;
        }
        if !self.cfg.overwrite {
            return false;
        }

        match self.cfg.discipline {
            Discipline::Fifo => {
                // When full, the write index sits on the oldest record;
                // overwriting it evicts that record and the read side
                // follows.
                #[cfg(feature = "tracing")]
                tracing::trace!("Full fifo queue: evicted oldest record");
                let span = self.record_span(self.write_index);
                self.storage[span].copy_from_slice(record);
                self.write_index = index::advance(self.write_index, self.cfg.capacity);
                self.read_index = index::advance(self.read_index, self.cfg.capacity);
            }
            Discipline::Lifo => {
                // The top of the stack is replaced in place; no index
                // moves and the replaced record is unrecoverable.
                #[cfg(feature = "tracing")]
                tracing::trace!("Full lifo queue: replaced top of stack");
                let top = index::retreat(self.write_index, self.cfg.capacity);
                let span = self.record_span(top);
                self.storage[span].copy_from_slice(record);
            }
        }

        true
    }

    /// Pops the next record into `out`, returning false when empty.
    ///
    /// FIFO reads the oldest unread record; LIFO reads the most recently
    /// written one. On failure `out` is left untouched.
    ///
    /// # Panics
    /// Panics if `out.len()` differs from [`record_size`](Self::record_size).
    pub fn pop(&mut self, out: &mut [u8]) -> bool {
        assert_eq!(
            out.len(),
            self.record_size,
            "record length must equal the queue's record size"
        );

        if self.is_empty() {
            return false;
        }

        let slot = match self.cfg.discipline {
            Discipline::Fifo => {
                let slot = self.read_index;
                self.read_index = index::advance(self.read_index, self.cfg.capacity);
                slot
            }
            Discipline::Lifo => {
                self.write_index = index::retreat(self.write_index, self.cfg.capacity);
                self.write_index
            }
        };

        out.copy_from_slice(&self.storage[self.record_span(slot)]);
        self.count -= 1;
        true
    }

    /// Copies the next record into `out` without consuming it.
    ///
    /// Addresses the same record `pop` would, but mutates nothing: any
    /// number of consecutive peeks observe the same record and the same
    /// `len()`. On an empty queue returns false and leaves `out`
    /// untouched.
    ///
    /// # Panics
    /// Panics if `out.len()` differs from [`record_size`](Self::record_size).
    pub fn peek(&self, out: &mut [u8]) -> bool {
        assert_eq!(
            out.len(),
            self.record_size,
            "record length must equal the queue's record size"
        );

        if self.is_empty() {
            return false;
        }

        let slot = match self.cfg.discipline {
            Discipline::Fifo => self.read_index,
            Discipline::Lifo => index::retreat(self.write_index, self.cfg.capacity),
        };

        out.copy_from_slice(&self.storage[self.record_span(slot)]);
        true
    }

    /// Discards the next record without copying it out.
    ///
    /// Equivalent to a pop whose output is thrown away. Returns false on
    /// an empty queue.
    pub fn drop_next(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }

        match self.cfg.discipline {
            Discipline::Fifo => {
                self.read_index = index::advance(self.read_index, self.cfg.capacity);
            }
            Discipline::Lifo => {
                self.write_index = index::retreat(self.write_index, self.cfg.capacity);
            }
        }
        self.count -= 1;
        true
    }

    /// Empties the queue without touching the backing store.
    ///
    /// Stored bytes remain in place but are no longer addressable; the
    /// allocation is reused as-is.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Cleared byte queue ({} records discarded)", self.count);
        self.write_index = 0;
        self.read_index = 0;
        self.count = 0;
    }

    /// Releases the queue and its backing store.
    ///
    /// Dropping the value has the same effect; this method exists for
    /// callers that want the release to read as an explicit lifecycle
    /// step. A torn-down queue cannot be used again; re-create one with
    /// [`new`](Self::new), with the same or different geometry.
    pub fn teardown(self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Tearing down byte queue ({} bytes)", self.storage.len());
    }

    #[inline]
    fn record_span(&self, slot: usize) -> core::ops::Range<usize> {
        let start = slot * self.record_size;
        start..start + self.record_size
    }
}
