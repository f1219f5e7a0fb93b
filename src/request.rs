//! The in-memory description of a single conversion

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Output format requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    /// Raster output, exported at a fixed pixel size
    Png,

    /// Vector output
    Pdf,
}

impl TargetFormat {
    /// File extension used for the output path, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Pdf => "pdf",
        }
    }

    /// Renderer flag that selects this format and takes the output path
    pub fn export_flag(self) -> &'static str {
        match self {
            TargetFormat::Png => "--export-png",
            TargetFormat::Pdf => "--export-pdf",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pixel dimensions passed to the renderer for raster exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSize {
    /// Value of `--export-width`
    pub width: u32,

    /// Value of `--export-height`
    pub height: u32,
}

impl ExportSize {
    /// Width used when none is given on the command line
    pub const DEFAULT_WIDTH: u32 = 1200;

    /// Height used when none is given on the command line
    pub const DEFAULT_HEIGHT: u32 = 300;
}

impl Default for ExportSize {
    fn default() -> Self {
        ExportSize {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Remove everything from the last `.` onwards. A path without any `.` is
/// returned unchanged. Paths need not be valid UTF-8.
///
/// The search covers the whole string, not just the final path component,
/// so `dir.d/file` becomes `dir`.
///
/// ```
/// # use svgexport::request::strip_extension;
/// assert_eq!(strip_extension("a.b.svg".as_ref()), "a.b");
/// assert_eq!(strip_extension("noext".as_ref()), "noext");
/// assert_eq!(strip_extension(".svg".as_ref()), "");
/// ```
pub fn strip_extension(path: &OsStr) -> &OsStr {
    let bytes = path.as_encoded_bytes();

    match bytes.iter().rposition(|&b| b == b'.') {
        // SAFETY: `bytes` came from an `OsStr` and is split right before an
        // ASCII character, which is always a valid boundary.
        Some(idx) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..idx]) },
        None => path,
    }
}

/// Derive the output path for `input` by swapping its extension for the one
/// belonging to `format`
pub fn output_path_for(input: &OsStr, format: TargetFormat) -> OsString {
    let mut output = strip_extension(input).to_os_string();
    output.push(".");
    output.push(format.extension());

    output
}

/// One input file, the file it will be converted into, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    input_path: OsString,
    output_path: OsString,
    target_format: TargetFormat,
    export_size: Option<ExportSize>,
}

impl ConversionRequest {
    /// Build a request for `input`. PNG requests get the default export size.
    pub fn new(input: impl Into<OsString>, target_format: TargetFormat) -> Self {
        let input_path = input.into();
        let output_path = output_path_for(&input_path, target_format);
        let export_size = match target_format {
            TargetFormat::Png => Some(ExportSize::default()),
            TargetFormat::Pdf => None,
        };

        ConversionRequest {
            input_path,
            output_path,
            target_format,
            export_size,
        }
    }

    /// Override the raster size. Has no effect on PDF requests, which the
    /// renderer exports at the drawing's own dimensions.
    pub fn with_export_size(mut self, size: ExportSize) -> Self {
        if self.target_format == TargetFormat::Png {
            self.export_size = Some(size);
        }

        self
    }

    /// Path of the SVG file as given on the command line
    pub fn input_path(&self) -> &OsStr {
        &self.input_path
    }

    /// Path the renderer is asked to write to
    pub fn output_path(&self) -> &OsStr {
        &self.output_path
    }

    /// Format the renderer is asked to produce
    pub fn target_format(&self) -> TargetFormat {
        self.target_format
    }

    /// `None` for PDF requests
    pub fn export_size(&self) -> Option<ExportSize> {
        self.export_size
    }

    /// Arguments handed to the renderer, in order, excluding the program
    /// name itself
    pub fn renderer_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-z".into(),
            self.target_format.export_flag().into(),
            self.output_path.clone(),
        ];

        if let Some(size) = self.export_size {
            args.push("--export-width".into());
            args.push(size.width.to_string().into());
            args.push("--export-height".into());
            args.push(size.height.to_string().into());
        }

        args.push(self.input_path.clone());

        args
    }
}
