//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use decoder::prelude::*;
//!
//! let ledger = HistoryLedger::new();
//! let options = ConversionOptions::default();
//! let output = encode(Scheme::Rot13, "Hello", &options).unwrap();
//! ledger.record(ConversionResult::new("Hello", output, Scheme::Rot13, false));
//! assert_eq!(ledger.len(), 1);
//! ```

// Core conversions
pub use crate::{ConversionOptions, Scheme, decode, encode, transform};

// Errors
pub use crate::ConversionError;

// Batch
pub use crate::{process_batch, spawn_batch};

// History
pub use crate::{ConversionResult, HistoryLedger};
