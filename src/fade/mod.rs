
use std::{io, path::Path};

use image::{ImageError, ImageFormat, Rgba, RgbaImage};
use log::info;

use crate::errors::FadeError;

/// Alpha multiplier applied when no other factor is given. 85% opacity.
pub const DEFAULT_OPACITY: f32 = 0.85;

pub trait PixelExt {
    fn scale_alpha(&self, factor: f32) -> Self;
}

impl PixelExt for Rgba<u8> {
    fn scale_alpha(&self, mut factor: f32) -> Self {
        factor = factor.clamp(0.0, 1.0);
        let mut new = *self;
        // Truncate, don't round: alpha 3 at 85% comes out 2.
        new.0[3] = (self.0[3] as f32 * factor) as u8;
        new
    }
}

/// Scales every pixel's alpha by `factor`, leaving the color channels
/// untouched. Produces a new buffer with the same dimensions and pixel
/// order; the input is not modified.
pub fn fade_alpha(img: &RgbaImage, factor: f32) -> RgbaImage {
    let mut faded = img.clone();
    faded.pixels_mut().for_each(|px| *px = px.scale_alpha(factor));
    faded
}

/// Applies `factor` to the alpha channel of the image at `input` and writes
/// the result to `output` as a PNG. `output` may equal `input`, in which
/// case the original file is overwritten.
///
/// Inputs without an alpha channel are converted to RGBA first, so their
/// pixels fade from fully opaque.
pub fn adjust_opacity<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, factor: f32) -> Result<(), FadeError> {
    let input = input.as_ref();
    let rgba = load_rgba(input)?;
    info!("Loaded '{}' ({}x{})", input.display(), rgba.width(), rgba.height());

    let faded = fade_alpha(&rgba, factor);
    save_image(&faded, output)
}

fn load_rgba(path: &Path) -> Result<RgbaImage, FadeError> {
    let img = image::open(path).map_err(|e| match e {
        ImageError::IoError(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            FadeError::NotFound(path.to_string_lossy().into_owned())
        }
        ImageError::IoError(io_err) => FadeError::Io(path.to_string_lossy().into_owned(), io_err.kind()),
        other => FadeError::Decode(path.to_string_lossy().into_owned(), other.to_string()),
    })?;
    Ok(img.into_rgba8())
}

/// Saves an image to disc as a PNG, regardless of the extension on `filename`.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, filename: P) -> Result<(), FadeError> {
    img.save_with_format(&filename, ImageFormat::Png)
        .map_err(|e| FadeError::Encode(filename.as_ref().to_string_lossy().into_owned(), e.to_string()))?;
    Ok(())
}
