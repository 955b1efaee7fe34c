//! Output adapters for finished symbols
//!
//! Text (terminal half-blocks), SVG and raster images through the `image`
//! crate. Every renderer surrounds the symbol with a light quiet zone.

use crate::encoder::EncoderConfig;
use crate::error::{QrError, Result};
use crate::models::QrCode;
use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::str::FromStr;

/// Pixel scale, border and colours for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module (must be at least 1)
    pub module_size: u32,
    /// Light border in modules
    pub quiet_zone: u32,
    /// Grey level of dark modules
    pub dark: u8,
    /// Grey level of light modules and the quiet zone
    pub light: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 4,
            quiet_zone: 4,
            dark: 0,
            light: 255,
        }
    }
}

impl RenderOptions {
    /// Scale and border taken from an encoder configuration
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self {
            module_size: config.module_size as u32,
            quiet_zone: config.quiet_zone as u32,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.module_size == 0 {
            return Err(QrError::InvalidRenderOption(
                "module size must be at least 1 pixel".to_string(),
            ));
        }
        Ok(())
    }

    /// Side length in pixels of a rendered `code`
    pub fn image_side(&self, code: &QrCode) -> u32 {
        (code.size() as u32 + 2 * self.quiet_zone) * self.module_size
    }
}

/// Raster container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Portable Network Graphics
    Png,
    /// Windows bitmap
    Bmp,
    /// JPEG (quality 90)
    Jpeg,
    /// Tagged Image File Format
    Tiff,
    /// Graphics Interchange Format (palette, written from RGBA)
    Gif,
}

impl OutputFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                QrError::InvalidRenderOption(format!("no file extension on {}", path.display()))
            })?
            .parse()
    }

    fn output_format(self) -> ImageOutputFormat {
        match self {
            OutputFormat::Png => ImageOutputFormat::Png,
            OutputFormat::Bmp => ImageOutputFormat::Bmp,
            OutputFormat::Jpeg => ImageOutputFormat::Jpeg(90),
            OutputFormat::Tiff => ImageOutputFormat::Tiff,
            OutputFormat::Gif => ImageOutputFormat::Gif,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "bmp" => Ok(OutputFormat::Bmp),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "gif" => Ok(OutputFormat::Gif),
            other => Err(QrError::InvalidRenderOption(format!(
                "unsupported image format [{other}]"
            ))),
        }
    }
}

/// Module colour in bordered coordinates; the quiet zone is light
fn module_with_border(code: &QrCode, quiet_zone: usize, x: usize, y: usize) -> bool {
    match (x.checked_sub(quiet_zone), y.checked_sub(quiet_zone)) {
        (Some(x), Some(y)) => code.get(x, y),
        _ => false,
    }
}

/// Terminal rendering, two module rows per text line using half blocks
pub fn to_ascii(code: &QrCode, quiet_zone: usize) -> String {
    let total = code.size() + 2 * quiet_zone;
    let mut lines = Vec::with_capacity(total.div_ceil(2));
    for y in (0..total).step_by(2) {
        let line: String = (0..total)
            .map(|x| {
                let top = module_with_border(code, quiet_zone, x, y);
                let bottom = y + 1 < total && module_with_border(code, quiet_zone, x, y + 1);
                match (top, bottom) {
                    (false, false) => ' ',
                    (true, false) => '\u{2580}',
                    (false, true) => '\u{2584}',
                    (true, true) => '\u{2588}',
                }
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

/// Self-contained SVG document, one path for all dark modules
pub fn to_svg(code: &QrCode, options: &RenderOptions) -> Result<String> {
    options.validate()?;
    let side = options.image_side(code);
    let scale = options.module_size;
    let quiet = options.quiet_zone;
    let grey = |level: u8| format!("#{level:02x}{level:02x}{level:02x}");

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {side} {side}\" \
         width=\"{side}\" height=\"{side}\" shape-rendering=\"crispEdges\">\n\
         <rect width=\"{side}\" height=\"{side}\" fill=\"{}\"/>\n<path d=\"",
        grey(options.light)
    );
    for y in 0..code.size() {
        for x in 0..code.size() {
            if code.get(x, y) {
                let px = (x as u32 + quiet) * scale;
                let py = (y as u32 + quiet) * scale;
                let _ = write!(svg, "M{px},{py}h{scale}v{scale}h-{scale}z");
            }
        }
    }
    let _ = write!(svg, "\" fill=\"{}\"/>\n</svg>\n", grey(options.dark));
    Ok(svg)
}

/// 8-bit greyscale raster of `code`
pub fn to_image(code: &QrCode, options: &RenderOptions) -> Result<GrayImage> {
    options.validate()?;
    let side = options.image_side(code);
    let scale = options.module_size;
    let quiet = options.quiet_zone as usize;
    Ok(GrayImage::from_fn(side, side, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        if module_with_border(code, quiet, x, y) {
            Luma([options.dark])
        } else {
            Luma([options.light])
        }
    }))
}

/// Encode the raster into `writer`
pub fn write_image<W: Write + Seek>(
    code: &QrCode,
    options: &RenderOptions,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let image = DynamicImage::ImageLuma8(to_image(code, options)?);
    image.write_to(writer, format.output_format())?;
    Ok(())
}

/// Save the raster to `path` in the given format
///
/// Writes through [`write_image`], which converts greyscale for GIF frames.
pub fn save_image<P: AsRef<Path>>(
    code: &QrCode,
    options: &RenderOptions,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_image(code, options, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}
