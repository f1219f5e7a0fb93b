#![warn(missing_docs)]
//! Convert SVG files to PNG or PDF by delegating to an external renderer

pub mod cli;
pub mod renderer;
pub mod request;

pub use renderer::Renderer;
pub use request::{ConversionRequest, ExportSize, TargetFormat};
