//! Image helpers on [`RgbaImage`]: solid fills, aspect-preserving resizing and
//! JPEG compression towards a size budget.

use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder, imageops::FilterType};
use log::{debug, warn};

use super::canvas::within_pixel_limit;
use super::{Canvas, Color, Rect, Size};
use crate::compat::{Zz, ZzCompatible, ZzType};

/// Lowest JPEG quality tried when compressing towards a budget.
pub const MIN_JPEG_QUALITY: u8 = 10;

/// Quality decrement between compression attempts.
const QUALITY_STEP: u8 = 10;

impl ZzCompatible for RgbaImage {}

impl ZzType<RgbaImage> {
    /// An image of `size` filled with `color`. Returns `None` for an empty size.
    ///
    /// [`Size::UNIT`] gives the one-pixel image commonly used as a background.
    #[must_use]
    pub fn solid(color: Color, size: Size) -> Option<RgbaImage> {
        let mut canvas = Canvas::new(size)?;
        canvas.fill(Rect::from_size(size), color);
        Some(canvas.finish())
    }
}

impl Zz<&RgbaImage> {
    /// The image scaled to fit within `target` without changing its aspect ratio.
    ///
    /// The limiting scale factor is the smaller of the width and height ratios.
    /// Returns `None` when the image or the target is empty, or when the
    /// scaled image would exceed [`MAX_PIXELS`](super::canvas::MAX_PIXELS).
    #[must_use]
    pub fn resize_to_fit(&self, target: Size) -> Option<RgbaImage> {
        let (width, height) = self.base.dimensions();
        if width == 0 || height == 0 || target.is_empty() {
            return None;
        }

        let width = f64::from(width);
        let height = f64::from(height);
        let scale = (target.width / width).min(target.height / height);
        let scaled_width = scaled_extent(width * scale)?;
        let scaled_height = scaled_extent(height * scale)?;
        if !within_pixel_limit(scaled_width, scaled_height) {
            return None;
        }

        Some(image::imageops::resize(
            self.base,
            scaled_width,
            scaled_height,
            FilterType::Lanczos3,
        ))
    }

    /// JPEG data of roughly `kilobytes` KiB or less.
    ///
    /// Encodes at full quality first; while the result is over budget the
    /// quality is lowered step by step down to [`MIN_JPEG_QUALITY`]. The last
    /// attempt is returned even if it is still too large. Returns `None` when
    /// encoding fails.
    #[must_use]
    pub fn resize_to_kilobytes(&self, kilobytes: usize) -> Option<Vec<u8>> {
        let budget = kilobytes.saturating_mul(1024);
        let mut quality = 100u8;
        let mut encoded = self.jpeg_or_log(quality)?;

        while encoded.len() > budget && quality > MIN_JPEG_QUALITY {
            quality = quality.saturating_sub(QUALITY_STEP).max(MIN_JPEG_QUALITY);
            debug!(
                "JPEG is {} bytes, budget {budget}; retrying at quality {quality}",
                encoded.len()
            );
            encoded = self.jpeg_or_log(quality)?;
        }

        Some(encoded)
    }

    /// JPEG data at `quality` (1 to 100). Alpha is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects the image.
    pub fn jpeg_data(&self, quality: u8) -> crate::Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.base.clone()).to_rgb8();
        let mut data = Vec::new();
        JpegEncoder::new_with_quality(&mut data, quality.clamp(1, 100)).encode_image(&rgb)?;
        Ok(data)
    }

    fn jpeg_or_log(&self, quality: u8) -> Option<Vec<u8>> {
        self.jpeg_data(quality)
            .map_err(|err| warn!("Failed to encode JPEG at quality {quality}: {err}"))
            .ok()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_extent(value: f64) -> Option<u32> {
    let value = value.round().max(1.0);
    (value <= f64::from(u32::MAX)).then_some(value as u32)
}
