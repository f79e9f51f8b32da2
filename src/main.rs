mod cli;

use decoder::{ConversionError, SchemeNotFoundError};

fn main() {
    if let Err(e) = cli::run() {
        // Library errors carry their own `error:` header and hints
        if e.is::<ConversionError>() || e.is::<SchemeNotFoundError>() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
