//! Shared command line handling for the `svg2png` and `svg2pdf` binaries

use std::ffi::OsString;
use std::io::Write;
use std::process::{ExitCode, ExitStatus};

use eyre::{Context, Result};
use structopt::clap::AppSettings;
use structopt::StructOpt;
use tracing::debug;

use crate::renderer::Renderer;
use crate::request::{ConversionRequest, ExportSize, TargetFormat};

/// Settings every binary's parser needs so that anything after the input
/// file, flag-like or not, lands in [`CommonOptions::ignored`]
pub const PARSER_SETTINGS: &[AppSettings] =
    &[AppSettings::TrailingVarArg, AppSettings::AllowLeadingHyphen];

/// Options accepted by both binaries
#[derive(Debug, StructOpt)]
#[structopt(settings = PARSER_SETTINGS)]
pub struct CommonOptions {
    /// Renderer executable to delegate to
    #[structopt(
        long,
        default_value = crate::renderer::DEFAULT_RENDERER,
        parse(from_os_str)
    )]
    pub renderer: OsString,

    /// Increase log output, may be repeated
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u32,

    /// SVG file to convert
    #[structopt(parse(from_os_str))]
    pub input: Option<OsString>,

    /// Anything after the input file is ignored
    #[structopt(hidden = true, allow_hyphen_values = true, parse(from_os_str))]
    pub ignored: Vec<OsString>,
}

/// Raster size flags, only offered by `svg2png`
#[derive(Debug, StructOpt)]
pub struct SizeOptions {
    /// Exported image width in pixels
    #[structopt(long, default_value = "1200")]
    pub width: u32,

    /// Exported image height in pixels
    #[structopt(long, default_value = "300")]
    pub height: u32,
}

impl From<&SizeOptions> for ExportSize {
    fn from(opts: &SizeOptions) -> Self {
        ExportSize {
            width: opts.width,
            height: opts.height,
        }
    }
}

/// How an invocation ended
#[derive(Debug)]
pub enum Outcome {
    /// No input was given, so only the usage line was printed
    Usage,

    /// The renderer ran and exited with this status
    Rendered(ExitStatus),
}

impl Outcome {
    /// Exit code for the current process. Printing usage counts as success.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Usage => ExitCode::SUCCESS,
            Outcome::Rendered(status) => ExitCode::from(status_code(status)),
        }
    }
}

/// Collapse a child's exit status into a process exit code, using the shell
/// convention of `128 + signal` for children killed by a signal
pub fn status_code(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128u8.wrapping_add(signal as u8);
        }
    }

    1
}

/// The name this process was invoked as, used in the usage line
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "svgexport".to_owned())
}

/// Print the usage line for `program`
pub fn print_usage(program: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "usage: {} <file.svg>", program).wrap_err("failed to write usage")
}

/// Convert the input named in `opts` to `format`, or print usage to `out` if
/// there is none. `size` is only consulted for PNG output.
pub fn run(
    program: &str,
    format: TargetFormat,
    opts: &CommonOptions,
    size: Option<ExportSize>,
    out: &mut impl Write,
) -> Result<Outcome> {
    let input = match &opts.input {
        Some(input) => input,
        None => {
            print_usage(program, out)?;
            return Ok(Outcome::Usage);
        }
    };

    if !opts.ignored.is_empty() {
        debug!(ignored = ?opts.ignored, "ignoring extra arguments");
    }

    let mut request = ConversionRequest::new(input.clone(), format);
    if let Some(size) = size {
        request = request.with_export_size(size);
    }
    debug!(?request, "converting");

    let status = Renderer::new(opts.renderer.clone()).run(&request)?;

    Ok(Outcome::Rendered(status))
}

/// Send `tracing` output to stderr, filtered by verbosity unless `RUST_LOG`
/// is set
pub fn configure_logging(verbosity: u32) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;

    let directives = match std::env::var("RUST_LOG") {
        Ok(overrides) => overrides,
        Err(_) => match verbosity {
            0 => "svgexport=warn",
            1 => "svgexport=debug",
            _ => "svgexport=trace",
        }
        .to_string(),
    };

    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let registry = tracing_subscriber::Registry::default().with(env_filter);
    let mut fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time();
    if verbosity < 2 {
        fmt_layer = fmt_layer.with_target(false);
    }
    let sub = registry.with(fmt_layer);
    tracing::subscriber::set_global_default(sub).wrap_err("failed to set default logger")
}
