//! Offscreen drawing surface.
//!
//! A [`Canvas`] is created at the start of an image or snapshot operation and
//! consumed by [`Canvas::finish`] before the operation returns. Dropping it
//! early releases the pixel buffer.

use image::{Rgba, RgbaImage};

use super::{Color, Point, Rect, RoundedRect, Size};

/// Largest canvas handed out, in pixels (a 16384 x 16384 square).
pub const MAX_PIXELS: u64 = 1 << 28;

#[derive(Debug)]
pub struct Canvas {
    image: RgbaImage,
    clips: Vec<RoundedRect>,
}

impl Canvas {
    /// A transparent canvas covering `size`, rounded up to whole pixels.
    ///
    /// Returns `None` for an empty size or one above [`MAX_PIXELS`].
    #[must_use]
    pub fn new(size: Size) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        let width = pixel_extent(size.width)?;
        let height = pixel_extent(size.height)?;
        if !within_pixel_limit(width, height) {
            return None;
        }
        Some(Self {
            image: RgbaImage::new(width, height),
            clips: Vec::new(),
        })
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.image.width()), f64::from(self.image.height()))
    }

    /// Restrict later fills to `clip` until the matching [`pop_clip`](Self::pop_clip).
    ///
    /// Clips nest: a pixel is painted only when it is inside all of them.
    pub fn push_clip(&mut self, clip: RoundedRect) {
        self.clips.push(clip);
    }

    pub fn pop_clip(&mut self) {
        self.clips.pop();
    }

    /// Paint `color` over `rect`, clipped to the canvas and the active clips.
    ///
    /// Pixels whose centre lies inside `rect` are covered. Translucent colors
    /// are blended over what is already there.
    pub fn fill(&mut self, rect: Rect, color: Color) {
        let x_range = pixel_span(rect.origin.x, rect.max_x(), self.image.width());
        let y_range = pixel_span(rect.origin.y, rect.max_y(), self.image.height());
        let source = color.to_rgba8();

        for y in y_range {
            for x in x_range.clone() {
                let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if !self.clips.iter().all(|clip| clip.contains(centre)) {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                *pixel = blend(source, *pixel);
            }
        }
    }

    /// Hand over the rendered pixels.
    #[must_use]
    pub fn finish(self) -> RgbaImage {
        self.image
    }
}

/// Whether an RGBA buffer of `width` x `height` stays under [`MAX_PIXELS`]
/// and fits in memory addressing.
pub(crate) fn within_pixel_limit(width: u32, height: u32) -> bool {
    let pixels = u64::from(width) * u64::from(height);
    pixels <= MAX_PIXELS && usize::try_from(pixels * 4).is_ok()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_extent(value: f64) -> Option<u32> {
    let value = value.ceil();
    (value <= f64::from(u32::MAX)).then_some(value as u32)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
    let clamp = |edge: f64| (edge - 0.5).ceil().clamp(0.0, f64::from(limit)) as u32;
    clamp(start)..clamp(end)
}

/// Source-over compositing of 8-bit pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(source: Rgba<u8>, destination: Rgba<u8>) -> Rgba<u8> {
    let source_alpha = f64::from(source[3]) / 255.0;
    if source_alpha >= 1.0 {
        return source;
    }
    let destination_alpha = f64::from(destination[3]) / 255.0;
    let out_alpha = source_alpha + destination_alpha * (1.0 - source_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let value = (f64::from(source[i]) * source_alpha
            + f64::from(destination[i]) * destination_alpha * (1.0 - source_alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round() as u8,
    ])
}
