//! Generic record queue with a compile-time record width.
//!
//! The record width is `size_of::<T>()`, so the "record must be exactly
//! as wide as the queue's slots" contract holds by construction instead
//! of at a runtime boundary. Slots live in a dense heap slab of
//! `capacity` records, uninitialized until written; `count` alone decides
//! which slots hold live records.
//!
//! `T: Copy` keeps records plain data: overwriting a slot on a full push
//! never has a destructor to run, and reading a slot never moves anything
//! out from under the queue.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use core::mem::MaybeUninit;

use crate::cfg::{Discipline, QueueCfg};
use crate::error::{QueueError, QueueResult};
use crate::index;

/// Fixed-capacity queue of records of type `T`.
///
/// Supports FIFO and LIFO access over the same storage, selected at
/// construction via [`QueueCfg`]. All operations complete in bounded
/// constant time with no suspension points. For records whose width is
/// only known at runtime, use [`ByteQueue`](crate::ByteQueue).
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
/// use recq::{Discipline, Queue, QueueCfg};
///
/// let cfg = QueueCfg {
///     capacity: 3,
///     discipline: Discipline::Lifo,
///     overwrite: false,
/// };
/// let mut stack = Queue::<u32>::new(&cfg)?;
///
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// # Ok::<(), recq::QueueError>(())
/// ```
#[derive(Debug)]
pub struct Queue<T: Copy> {
    cfg: QueueCfg,
    storage: Box<[MaybeUninit<T>]>,
    write_index: usize,
    read_index: usize,
    count: usize,
}

impl<T: Copy> Queue<T> {
    /// Creates an empty queue of `capacity` records.
    ///
    /// Allocates the slot storage eagerly. Returns
    /// [`QueueError::InvalidConfig`] when the configuration fails
    /// [`QueueCfg::validate`] or `T` is zero-sized (records must occupy
    /// storage), and [`QueueError::AllocationFailed`] when the allocator
    /// cannot provide the slots.
    pub fn new(cfg: &QueueCfg) -> QueueResult<Self> {
        cfg.validate().map_err(QueueError::invalid_config)?;
        if core::mem::size_of::<T>() == 0 {
            return Err(QueueError::invalid_config("record type must have a non-zero size"));
        }

        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        if slots.try_reserve_exact(cfg.capacity).is_err() {
            return Err(QueueError::allocation_failed(
                cfg.storage_bytes_for(core::mem::size_of::<T>()),
                "queue record slots",
            ));
        }
        slots.resize(cfg.capacity, MaybeUninit::uninit());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Created {} queue: {} records x {} bytes",
            cfg.discipline.name(),
            cfg.capacity,
            core::mem::size_of::<T>()
        );

        Ok(Self {
            cfg: cfg.clone(),
            storage: slots.into_boxed_slice(),
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
        core::mem::size_of::<T>()
    }

    /// Returns the total backing-store size in bytes.
    pub fn storage_bytes(&self) -> usize {
        self.cfg.capacity * core::mem::size_of::<T>()
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
    /// A failed push changes no state.
    pub fn push(&mut self, record: T) -> bool {
        if !self.is_full() {
            self.storage[self.write_index] = MaybeUninit::new(record);
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
                self.storage[self.write_index] = MaybeUninit::new(record);
                self.write_index = index::advance(self.write_index, self.cfg.capacity);
                self.read_index = index::advance(self.read_index, self.cfg.capacity);
            }
            Discipline::Lifo => {
                // The top of the stack is replaced in place; no index
                // moves and the replaced record is unrecoverable.
                #[cfg(feature = "tracing")]
                tracing::trace!("Full lifo queue: replaced top of stack");
                let top = index::retreat(self.write_index, self.cfg.capacity);
                self.storage[top] = MaybeUninit::new(record);
            }
        }

        true
    }

    /// Pops the next record, or `None` when the queue is empty.
    ///
    /// FIFO reads the oldest unread record; LIFO reads the most recently
    /// written one.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
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

        self.count -= 1;
        // SAFETY: `count` was non-zero, and the slot addressed here is in
        // the live region bounded by it, so it was written by an earlier
        // push and never invalidated.
        Some(unsafe { self.storage[slot].assume_init_read() })
    }

    /// Returns a copy of the next record without consuming it, or `None`
    /// when the queue is empty.
    ///
    /// Addresses the same record `pop` would, but mutates nothing: any
    /// number of consecutive peeks observe the same record and the same
    /// `len()`.
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let slot = match self.cfg.discipline {
            Discipline::Fifo => self.read_index,
            Discipline::Lifo => index::retreat(self.write_index, self.cfg.capacity),
        };

        // SAFETY: same live-region argument as `pop`; the read does not
        // move the record out, and `T: Copy` keeps the slot valid.
        Some(unsafe { self.storage[slot].assume_init_read() })
    }

    /// Discards the next record without returning it.
    ///
    /// Equivalent to a pop whose result is thrown away. Returns false on
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

    /// Empties the queue without touching the slot storage.
    ///
    /// Previously written records remain in their slots but are no longer
    /// addressable; the allocation is reused as-is.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Cleared queue ({} records discarded)", self.count);
        self.write_index = 0;
        self.read_index = 0;
        self.count = 0;
    }

    /// Releases the queue and its slot storage.
    ///
    /// Dropping the value has the same effect; this method exists for
    /// callers that want the release to read as an explicit lifecycle
    /// step. A torn-down queue cannot be used again; re-create one with
    /// [`new`](Self::new), with the same or different geometry.
    pub fn teardown(self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Tearing down queue ({} slots)", self.cfg.capacity);
    }
}
