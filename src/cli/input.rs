use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalArgs;

/// Reads UTF-8 text from `file`, or from stdin when no file is given,
/// enforcing `--max-size` unless `--force` is set.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let Some(file_path) = file else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;

        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "input size ({} bytes) exceeds maximum ({} bytes). Pass a file with --force for large inputs.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        return Ok(buffer);
    };

    check_file_size(file_path, global)?;
    fs::read_to_string(file_path)
        .map_err(|e| format!("cannot read '{}': {}", file_path.display(), e).into())
}

fn check_file_size(path: &Path, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 {
        return Ok(());
    }

    let file_size = fs::metadata(path)?.len() as usize;
    if file_size <= global.max_size {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            eprintln!(
                "warning: processing large file ({} bytes, limit: {} bytes)",
                file_size, global.max_size
            );
        }
        Ok(())
    } else {
        Err(format!(
            "file size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            file_size, global.max_size
        )
        .into())
    }
}

/// Drops a single trailing `\n` or `\r\n`.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(text)
}

/// Writes `text` to `output`, or prints it to stdout followed by a newline.
pub fn write_output(output: Option<&PathBuf>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => println!("{}", text),
    }
    Ok(())
}
