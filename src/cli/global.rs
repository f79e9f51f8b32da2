use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress progress and informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,

    /// Read settings from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}
