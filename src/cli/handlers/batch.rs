use crate::cli::{args::BatchArgs, global::GlobalArgs, input::read_input};
use decoder::{DecoderConfig, output_file_name, spawn_batch};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{resolve_scheme, warn_unused_shift};

pub fn handle(
    args: BatchArgs,
    global: &GlobalArgs,
    config: &DecoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = resolve_scheme(&args.scheme, args.decode)?;
    warn_unused_shift(scheme, args.shift, global);
    let options = config.conversion_options(args.decode, args.shift)?;

    let text = normalize_line_endings(read_input(Some(&args.file), global)?);

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    let output_path = output_dir.join(output_file_name(&args.file, scheme, args.decode));
    info!("batch: {:?} -> {:?}", args.file, output_path);

    let show_progress = !global.quiet && config.show_progress();
    let handle = spawn_batch(text, scheme, options);

    let mut reported = false;
    for fraction in handle.progress().iter() {
        if show_progress {
            eprint!("\r{}: {:>3.0}%", scheme.name(), fraction * 100.0);
            reported = true;
        }
    }
    if reported {
        eprintln!();
    }

    let converted = handle.join()?;
    fs::write(&output_path, converted)
        .map_err(|e| format!("cannot write '{}': {}", output_path.display(), e))?;

    println!("{}", output_path.display());
    Ok(())
}

/// CRLF input is read as LF so every chunk matches what `encode` and
/// `session` see for the same line.
fn normalize_line_endings(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("SGk=\r\nSGk=\r\n".into()), "SGk=\nSGk=\n");
        assert_eq!(normalize_line_endings("a\nb".into()), "a\nb");
        assert_eq!(normalize_line_endings("lone\rcr".into()), "lone\rcr");
    }
}
