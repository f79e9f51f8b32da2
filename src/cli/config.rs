use decoder::DecoderConfig;
use std::path::Path;
use tracing::debug;

use crate::cli::global::GlobalArgs;

/// Loads settings from `--config` when given, otherwise from the standard
/// locations. An explicit file that cannot be read is an error; the
/// standard locations are best effort.
pub fn load_config(global: &GlobalArgs) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let Some(path) = &global.config else {
        return DecoderConfig::load_with_overrides();
    };

    let expanded = shellexpand::tilde(path);
    let path = Path::new(expanded.as_ref());
    let layer = DecoderConfig::load_from_file(path)
        .map_err(|e| format!("cannot load config '{}': {}", path.display(), e))?;
    debug!("config: using {:?}", path);

    let mut config = DecoderConfig::load_default()?;
    config.merge(layer);
    Ok(config)
}
