pub mod config;
pub mod options;
pub mod scheme;

pub use config::{BatchSettings, DecoderConfig, Settings};
pub use options::ConversionOptions;
pub use scheme::{Scheme, all_schemes, supports_reverse};
