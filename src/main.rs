use std::process::ExitCode;

use prettier_diffcheck::bootstrap::logging::init_tracing;
use prettier_diffcheck::presentation::cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    cli::run(std::env::args_os().collect()).await
}
