pub mod chunked;
pub mod entities;
pub mod errors;
pub mod morse;
pub mod percent;
pub mod radix;
pub mod rotation;
pub mod substitution;
pub mod word;

// Re-export error types for public API
pub use errors::{ConversionError, DecodeError, SchemeNotFoundError};
