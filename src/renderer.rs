//! Spawning the external vector-graphics renderer

use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus};

use eyre::{Context, Result};
use tracing::debug;

use crate::request::ConversionRequest;

/// Executable used when no other renderer is named
pub const DEFAULT_RENDERER: &str = "inkscape";

/// An external program that understands Inkscape's export flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    program: OsString,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_RENDERER)
    }
}

impl Renderer {
    /// Use `program`, looked up on `PATH` unless it contains a separator
    pub fn new(program: impl Into<OsString>) -> Self {
        Renderer {
            program: program.into(),
        }
    }

    /// Name or path of the renderer executable
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Build the command line for `request` without running it
    ///
    /// ```
    /// # use svgexport::{ConversionRequest, Renderer, TargetFormat};
    /// let request = ConversionRequest::new("drawing.svg", TargetFormat::Pdf);
    /// let cmd = Renderer::default().command(&request);
    ///
    /// assert_eq!(cmd.get_program(), "inkscape");
    /// assert_eq!(
    ///     cmd.get_args().collect::<Vec<_>>(),
    ///     ["-z", "--export-pdf", "drawing.pdf", "drawing.svg"]
    /// );
    /// ```
    pub fn command(&self, request: &ConversionRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(request.renderer_args());

        cmd
    }

    /// Run the renderer to completion. Its output streams are inherited and
    /// its exit status is handed back as-is.
    pub fn run(&self, request: &ConversionRequest) -> Result<ExitStatus> {
        let mut cmd = self.command(request);
        debug!(?cmd, "running renderer");

        let status = cmd
            .status()
            .wrap_err_with(|| format!("failed to run renderer {:?}", self.program))?;

        debug!(%status, output = ?request.output_path(), "renderer exited");

        Ok(status)
    }
}
