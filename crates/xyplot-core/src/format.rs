// File: crates/xyplot-core/src/format.rs
// Summary: Output encodings and their selection from the output path extension.

use std::path::Path;

use skia_safe as skia;

use crate::error::PlotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl OutputFormat {
    /// Pick the format from the (case-insensitive) file extension.
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::Webp),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(ext)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Webp => "WEBP",
            OutputFormat::Svg => "SVG",
        }
    }

    /// Raster encoder for this format; `None` for vector output.
    pub(crate) fn raster_encoding(self) -> Option<skia::EncodedImageFormat> {
        match self {
            OutputFormat::Png => Some(skia::EncodedImageFormat::PNG),
            OutputFormat::Jpeg => Some(skia::EncodedImageFormat::JPEG),
            OutputFormat::Webp => Some(skia::EncodedImageFormat::WEBP),
            OutputFormat::Svg => None,
        }
    }
}
