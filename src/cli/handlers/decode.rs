use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    input::{read_input, strip_line_ending, write_output},
};
use decoder::{ConversionError, DecoderConfig};

use super::{resolve_scheme, warn_unused_shift};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &DecoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = resolve_scheme(&args.scheme, true)?;
    warn_unused_shift(scheme, args.shift, global);
    let options = config.conversion_options(true, args.shift)?;

    let input = read_input(args.file.as_ref(), global)?;
    let text = strip_line_ending(&input);
    if text.is_empty() {
        return Err(ConversionError::EmptyInput.into());
    }

    let decoded = decoder::decode(scheme, text, &options)?;
    write_output(args.output.as_ref(), &decoded)
}
