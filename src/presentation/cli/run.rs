use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::application::dto::options::FormatOptions;
use crate::application::errors::CheckError;
use crate::application::use_cases::diffcheck::load_source_files::LoadSourceFiles;
use crate::application::use_cases::diffcheck::output_diff_results::{
    OutputDiffResults, ReportOutcome,
};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::presentation::cli::args::CliArgs;

pub const EXIT_FAILURE: u8 = 1;

pub fn exit_code(outcome: ReportOutcome) -> ExitCode {
    if outcome.needs_formatting() {
        ExitCode::from(EXIT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}

/// Parses `argv`, checks the targets and writes the report to stdout.
pub async fn run(argv: Vec<OsString>) -> ExitCode {
    if argv.len() <= 1 {
        let _ = CliArgs::command().print_help();
        return ExitCode::SUCCESS;
    }

    let args = match CliArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let ctx = AppContext::new(config);

    let mut stdout = io::stdout();
    match execute(&ctx, &args, &mut stdout).await {
        Ok(outcome) => exit_code(outcome),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

pub async fn execute(
    ctx: &AppContext,
    args: &CliArgs,
    out: &mut dyn Write,
) -> Result<ReportOutcome, CheckError> {
    let files = LoadSourceFiles {
        files: ctx.source_files.as_ref(),
    }
    .execute(&args.targets)
    .await?;

    let mut options = FormatOptions::diff_check();
    options.parser = args.parser.clone();

    let results = ctx.batch().execute(&files, &options).await;
    tracing::debug!(files = results.len(), "diffcheck_complete");

    let outcome = OutputDiffResults {
        out,
        colored: !args.no_color,
    }
    .execute(&results)?;
    Ok(outcome)
}
