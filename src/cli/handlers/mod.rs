pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod session;

use decoder::{ConversionError, Scheme};

use crate::cli::global::GlobalArgs;

/// Parses a scheme name and rejects decoding with an encode-only scheme
/// before any input is read.
fn resolve_scheme(name: &str, reverse: bool) -> Result<Scheme, Box<dyn std::error::Error>> {
    let scheme: Scheme = name.parse()?;
    if reverse && !scheme.supports_reverse() {
        return Err(ConversionError::unsupported_reverse(scheme).into());
    }
    Ok(scheme)
}

fn warn_unused_shift(scheme: Scheme, shift: Option<i32>, global: &GlobalArgs) {
    if shift.is_some() && scheme != Scheme::Caesar && !global.quiet {
        eprintln!(
            "warning: --shift only applies to caesar, ignoring for {}",
            scheme.name()
        );
    }
}
