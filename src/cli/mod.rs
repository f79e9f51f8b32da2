mod args;
mod config;
mod global;
mod handlers;
mod input;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{BatchArgs, ConfigAction, DecodeArgs, EncodeArgs, SessionArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "decoder")]
#[command(version)]
#[command(about = "Encode and decode text with Morse, Base64, ROT13, Caesar and a dozen other schemes", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with a scheme
    Encode(EncodeArgs),

    /// Decode text with a reversible scheme
    Decode(DecodeArgs),

    /// Convert a file line by line into a new file next to it
    Batch(BatchArgs),

    /// Convert stdin line by line and keep a history of the results
    Session(SessionArgs),

    /// Inspect schemes and settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // SAFETY: still single-threaded; nothing else reads the environment yet
        unsafe { std::env::set_var("NO_COLOR", "1") };
    }
    init_tracing(&cli.global);

    let config = config::load_config(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Batch(args) => handlers::batch::handle(args, &cli.global, &config),
        Commands::Session(args) => handlers::session::handle(args, &cli.global, &config),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &config),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise warnings, or errors only
/// with `--quiet`.
fn init_tracing(global: &GlobalArgs) {
    let default = if global.quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .init();
}
