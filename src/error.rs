//! Error handling for queue construction
//!
//! Only initialization can fail with an error value: a rejected
//! configuration or a backing store the allocator could not provide.
//! Full-queue and empty-queue conditions are ordinary outcomes reported
//! through the return value of the operation itself (`false` or `None`),
//! never through this type.
//!
//! The error type follows the same platform split as the rest of the
//! crate:
//!
//! - **std** (default): rich messages derived with `thiserror`
//! - **no_std**: compact `Error 0x{code:04X}` formatting with no heap use
//!
//! Each variant carries a numeric code for environments where string
//! formatting is unavailable, organized by category:
//!
//! - **Configuration** (0x4000-0x4FFF): rejected initialization parameters
//! - **Resource** (0x5000-0x5FFF): backing-store allocation failures

#[cfg(feature = "std")]
use thiserror::Error;

/// Result type for queue construction
pub type QueueResult<T> = Result<T, QueueError>;

/// Error raised while constructing a queue
///
/// A failed construction never produces a queue value, so there is no
/// partially-initialized state to guard against: the caller either holds
/// a usable queue or holds this error and may retry.
#[derive(Debug)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum QueueError {
    /// Rejected initialization parameters (zero capacity, zero record
    /// size, or a geometry whose byte size overflows `usize`)
    #[cfg_attr(feature = "std", error("Invalid queue configuration: {reason}"))]
    InvalidConfig {
        #[cfg(feature = "std")]
        reason: String,
        #[cfg(not(feature = "std"))]
        _reason: (),
    },

    /// Backing-store allocation failed
    ///
    /// The queue is unusable; retry construction once memory pressure
    /// subsides.
    #[cfg_attr(
        feature = "std",
        error("Allocation failed: {requested_bytes} bytes for {context}")
    )]
    AllocationFailed {
        requested_bytes: usize,
        #[cfg(feature = "std")]
        context: String,
        #[cfg(not(feature = "std"))]
        _context: (),
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (code, message) = match self {
            QueueError::InvalidConfig { .. } => (0x4001, "Invalid queue configuration"),
            QueueError::AllocationFailed { .. } => (0x5001, "Allocation failed"),
        };
        write!(f, "Error 0x{:04X}: {}", code, message)
    }
}

impl QueueError {
    /// Creates a configuration error from a validation message
    pub fn invalid_config(_reason: &str) -> Self {
        QueueError::InvalidConfig {
            #[cfg(feature = "std")]
            reason: _reason.to_string(),
            #[cfg(not(feature = "std"))]
            _reason: (),
        }
    }

    /// Creates an allocation error for a backing store of `requested_bytes`
    pub fn allocation_failed(requested_bytes: usize, _context: &str) -> Self {
        QueueError::AllocationFailed {
            requested_bytes,
            #[cfg(feature = "std")]
            context: _context.to_string(),
            #[cfg(not(feature = "std"))]
            _context: (),
        }
    }

    /// Returns true if this error reports an allocation failure
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, QueueError::AllocationFailed { .. })
    }

    /// Returns a numeric error code for embedded environments
    ///
    /// - **Configuration**: 0x4000-0x4FFF
    /// - **Resource**: 0x5000-0x5FFF
    pub const fn error_code(&self) -> u32 {
        match self {
            QueueError::InvalidConfig { .. } => 0x4001,
            QueueError::AllocationFailed { .. } => 0x5001,
        }
    }

    /// Returns the error category (the code's high nibble range)
    pub const fn error_category(&self) -> u32 {
        self.error_code() & 0xF000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QueueError::invalid_config("x").error_code(), 0x4001);
        assert_eq!(QueueError::allocation_failed(64, "x").error_code(), 0x5001);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(QueueError::invalid_config("x").error_category(), 0x4000);
        assert_eq!(QueueError::allocation_failed(64, "x").error_category(), 0x5000);
    }

    #[test]
    fn test_classification() {
        assert!(QueueError::allocation_failed(64, "x").is_allocation_error());
        assert!(!QueueError::invalid_config("x").is_allocation_error());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_std_display_carries_context() {
        let err = QueueError::allocation_failed(4096, "queue backing store");
        let msg = err.to_string();
        assert!(msg.contains("4096"));
        assert!(msg.contains("queue backing store"));

        let err = QueueError::invalid_config("queue capacity must be > 0");
        assert!(err.to_string().contains("capacity must be > 0"));
    }

    #[test]
    #[cfg(not(feature = "std"))]
    fn test_no_std_display_is_coded() {
        use core::fmt::Write;

        struct Buf([u8; 64], usize);
        impl Write for Buf {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                let bytes = s.as_bytes();
                self.0[self.1..self.1 + bytes.len()].copy_from_slice(bytes);
                self.1 += bytes.len();
                Ok(())
            }
        }

        let mut buf = Buf([0; 64], 0);
        write!(buf, "{}", QueueError::invalid_config("ignored")).unwrap();
        assert!(core::str::from_utf8(&buf.0[..buf.1])
            .unwrap()
            .starts_with("Error 0x4001"));
    }
}
