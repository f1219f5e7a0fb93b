use std::process::ExitCode;

use eyre::Result;
use structopt::StructOpt;
use svgexport::cli::{self, CommonOptions, SizeOptions};
use svgexport::TargetFormat;

#[derive(StructOpt)]
#[structopt(settings = cli::PARSER_SETTINGS)]
struct Options {
    #[structopt(flatten)]
    size: SizeOptions,

    #[structopt(flatten)]
    common: CommonOptions,
}

fn main() -> Result<ExitCode> {
    let opts = Options::from_args();
    cli::configure_logging(opts.common.verbose)?;

    let outcome = cli::run(
        &cli::program_name(),
        TargetFormat::Png,
        &opts.common,
        Some((&opts.size).into()),
        &mut std::io::stdout(),
    )?;

    Ok(outcome.exit_code())
}
