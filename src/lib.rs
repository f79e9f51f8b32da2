//! Multi-scheme text transformation.
//!
//! A registry of named schemes (Morse, binary, Base64, ROT13, Caesar, NATO,
//! Braille, HTML entities and more), each with a forward transform and, for
//! the reversible ones, a reverse transform. Large inputs go through the
//! chunked batch processor; completed conversions can be kept in a bounded
//! history and exported as a plain-text report.
//!
//! # Example
//!
//! ```
//! use decoder::{ConversionOptions, Scheme, decode, encode};
//!
//! let options = ConversionOptions::default();
//! let morse = encode(Scheme::Morse, "SOS", &options).unwrap();
//! assert_eq!(morse, "... --- ...");
//! assert_eq!(decode(Scheme::Morse, &morse, &options).unwrap(), "SOS");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::{
    BatchSettings, ConversionOptions, DecoderConfig, Scheme, Settings, all_schemes,
    supports_reverse,
};
pub use crate::core::options::{DEFAULT_CAESAR_SHIFT, MAX_CAESAR_SHIFT, MIN_CAESAR_SHIFT};
pub use crate::encoders::algorithms::{ConversionError, DecodeError, SchemeNotFoundError};
pub use crate::encoders::{decode, encode, transform};
pub use crate::features::{
    BatchHandle, BatchJob, CancellationReason, CancellationSource, CancellationToken,
    ConversionResult, HISTORY_CAPACITY, HistoryLedger, output_file_name, process_batch,
    spawn_batch, split_chunks,
};
pub use crate::features::history::DEFAULT_DATE_FORMAT;
