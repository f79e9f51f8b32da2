use crate::cli::{args::SessionArgs, global::GlobalArgs};
use decoder::{ConversionResult, DecoderConfig, HistoryLedger, transform};
use std::fs;
use std::io::{self, BufRead};
use tracing::debug;

use super::{resolve_scheme, warn_unused_shift};

/// Converts stdin line by line, printing each result and recording it in a
/// history ledger. The ledger report goes to `--export` when given.
pub fn handle(
    args: SessionArgs,
    global: &GlobalArgs,
    config: &DecoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = resolve_scheme(&args.scheme, args.decode)?;
    warn_unused_shift(scheme, args.shift, global);
    let options = config.conversion_options(args.decode, args.shift)?;
    if args.export.is_some() && !args.json {
        config.validate()?;
    }

    let ledger = HistoryLedger::new();
    let mut converted = 0usize;
    let mut failed = 0usize;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            debug!("session: skipping blank line");
            continue;
        }

        match transform(scheme, line, &options) {
            Ok(output) => {
                println!("{}", output);
                ledger.record(ConversionResult::new(line, output, scheme, args.decode));
                converted += 1;
            }
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    if let Some(path) = &args.export {
        let report = if args.json {
            ledger.export_json()?
        } else {
            ledger.export_with(config.date_format())?
        };
        fs::write(path, report)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    }

    if !global.quiet {
        eprintln!(
            "{} converted, {} kept in history",
            converted,
            ledger.len()
        );
    }

    if failed > 0 {
        return Err(format!("{} of {} lines failed to convert", failed, converted + failed).into());
    }
    Ok(())
}
