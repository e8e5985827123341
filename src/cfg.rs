//! Queue configuration types.
//!
//! Defines the access discipline and the initialization-time parameters
//! shared by both queue implementations.

use core::fmt;

/// Access discipline for a queue, fixed at initialization.
///
/// Selects which record a read-side operation (`pop`, `peek`, `drop_next`)
/// targets: the oldest unread record (FIFO) or the most recently written
/// one (LIFO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// First in, first out: reads retrieve the oldest unread record.
    Fifo,
    /// Last in, first out: reads retrieve the most recently written record.
    Lifo,
}

impl Discipline {
    /// Returns a human-readable name for this discipline
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fifo => "fifo",
            Discipline::Lifo => "lifo",
        }
    }
}

/// Configuration for a queue
///
/// Capacity and discipline are immutable for the queue's lifetime; the
/// overwrite flag selects what a push into a full queue does.
///
/// # Examples
/// ```rust
/// use recq::{Discipline, QueueCfg};
///
/// let telemetry = QueueCfg {
///     capacity: 64,
///     discipline: Discipline::Fifo,
///     overwrite: true, // keep the freshest 64 records
/// };
/// assert!(telemetry.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueCfg {
    /// Maximum number of records held at once. Must be non-zero.
    pub capacity: usize,
    /// Access discipline, fixed for the queue's lifetime.
    pub discipline: Discipline,
    /// When true, pushing into a full queue replaces a record instead of
    /// failing: FIFO evicts the oldest record, LIFO overwrites the most
    /// recent write slot.
    pub overwrite: bool,
}

impl QueueCfg {
    /// Validates the configuration
    ///
    /// Returns `Err` if `capacity` is 0.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.capacity == 0 {
            return Err("queue capacity must be > 0");
        }
        Ok(())
    }

    /// Returns the backing-store size in bytes for a given record width
    ///
    /// Saturates on overflow; constructors reject geometries whose exact
    /// product does not fit in `usize`.
    pub fn storage_bytes_for(&self, record_size: usize) -> usize {
        self.capacity.saturating_mul(record_size)
    }
}

impl Default for QueueCfg {
    /// Returns an average default: FIFO, 20 records, no overwrite.
    fn default() -> Self {
        QueueCfg {
            capacity: 20,
            discipline: Discipline::Fifo,
            overwrite: false,
        }
    }
}

impl fmt::Display for QueueCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(capacity={}, overwrite={})",
            self.discipline.name(),
            self.capacity,
            self.overwrite
        )
    }
}
