//! Fixed-capacity FIFO/LIFO record queues over a single contiguous
//! backing store.
//!
//! This crate provides circular queues of fixed-width records for
//! environments where dynamic per-element allocation is undesirable: the
//! backing store is allocated once at construction, every operation
//! completes in bounded constant time, and a full queue either refuses
//! new records or overwrites per a policy chosen up front.
//!
//! Two implementations share the same engine semantics:
//!
//! - [`Queue<T>`]: the record width is `size_of::<T>()`, fixed at
//!   compile time. Prefer this one: a mismatched record size is a type
//!   error, not a runtime hazard.
//! - [`ByteQueue`]: the record width is a runtime parameter and records
//!   are opaque byte slices, for widths only known at initialization.
//!
//! Both support the two access disciplines of [`Discipline`]: FIFO
//! (reads retrieve the oldest unread record) and LIFO (reads retrieve
//! the most recently written one), with an optional overwrite-on-full
//! policy per [`QueueCfg`].
//!
//! # Example
//!
//! ```rust
//! use recq::{Discipline, Queue, QueueCfg};
//!
//! let cfg = QueueCfg {
//!     capacity: 3,
//!     discipline: Discipline::Fifo,
//!     overwrite: true,
//! };
//! let mut q = Queue::<u32>::new(&cfg)?;
//!
//! for sample in [1, 2, 3, 4] {
//!     q.push(sample);
//! }
//! // Capacity 3 with overwrite: the oldest record made room for 4.
//! assert_eq!(q.pop(), Some(2));
//! assert_eq!(q.pop(), Some(3));
//! assert_eq!(q.pop(), Some(4));
//! # Ok::<(), recq::QueueError>(())
//! ```
//!
//! # Concurrency
//!
//! The queues provide no internal locking, atomics, or transactional
//! protocol; a single logical owner is assumed to perform all mutating
//! operations, and the types enforce that through `&mut self` receivers.
//! Sharing a queue between independent execution contexts (the
//! canonical case is an interrupt handler pushing while the main flow
//! pops) is a caller obligation: establish mutual exclusion around
//! every operation, e.g. by masking the interrupt source for the
//! critical section. This is a documented contract, not a defect; an
//! internal mutex would not make interrupt-vs-main sharing safe.
//!
//! # Platform support
//!
//! With the default `std` feature the crate integrates `thiserror` for
//! rich error messages. Without it the crate is `no_std` + `alloc` and
//! errors format as compact numeric codes. Optional features: `serde`
//! (config derives) and `tracing` (lifecycle/eviction logging).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bytes;
mod cfg;
mod error;
mod index;
mod queue;

// Public API exports
pub use bytes::ByteQueue;
pub use cfg::{Discipline, QueueCfg};
pub use error::{QueueError, QueueResult};
pub use queue::Queue;
