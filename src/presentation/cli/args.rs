use clap::Parser;

/// prettier-diffcheck - Show Prettier formatting differences
///
/// Shows what changes Prettier would make to your files without actually
/// modifying them. Exits with status 1 when any file needs formatting.
#[derive(Debug, Clone, Parser)]
#[command(name = "prettier-diffcheck", version)]
pub struct CliArgs {
    /// Files or glob patterns to check
    #[arg(value_name = "PATH_OR_GLOB")]
    pub targets: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Parser to use instead of the one inferred from the file name
    #[arg(long, value_name = "NAME")]
    pub parser: Option<String>,
}
