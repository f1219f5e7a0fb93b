use std::process::ExitCode;

use eyre::Result;
use structopt::StructOpt;
use svgexport::cli::{self, CommonOptions};
use svgexport::TargetFormat;

fn main() -> Result<ExitCode> {
    let opts = CommonOptions::from_args();
    cli::configure_logging(opts.verbose)?;

    let outcome = cli::run(
        &cli::program_name(),
        TargetFormat::Pdf,
        &opts,
        None,
        &mut std::io::stdout(),
    )?;

    Ok(outcome.exit_code())
}
