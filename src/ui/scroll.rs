//! Scroll views.

use image::RgbaImage;

use super::{Canvas, Point, Rect, Size, ViewId, ViewTree};
use crate::compat::{Zz, ZzCompatible};

/// An in-flight animated scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: Point,
    pub to: Point,
    /// Completed fraction in `[0, 1]`.
    pub progress: f64,
}

/// A viewport onto a larger content hierarchy.
///
/// The content lives in its own [`ViewTree`] whose root view spans the
/// content size. Setting the offset while a scroll indicator is visible
/// flashes that indicator; [`ScrollView::indicator_flashes`] counts those.
#[derive(Debug)]
pub struct ScrollView {
    pub frame: Rect,
    pub content_size: Size,
    pub shows_vertical_scroll_indicator: bool,
    pub shows_horizontal_scroll_indicator: bool,
    content_offset: Point,
    animation: Option<ScrollAnimation>,
    content: ViewTree,
    content_root: ViewId,
    indicator_flashes: usize,
}

impl ScrollView {
    #[must_use]
    pub fn new(frame: Rect, content_size: Size) -> Self {
        let mut content = ViewTree::new();
        let content_root = content.add_root(Rect::from_size(content_size));
        Self {
            frame,
            content_size,
            shows_vertical_scroll_indicator: true,
            shows_horizontal_scroll_indicator: true,
            content_offset: Point::ZERO,
            animation: None,
            content,
            content_root,
            indicator_flashes: 0,
        }
    }

    #[must_use]
    pub const fn content_offset(&self) -> Point {
        self.content_offset
    }

    #[must_use]
    pub const fn animation(&self) -> Option<ScrollAnimation> {
        self.animation
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub const fn indicator_flashes(&self) -> usize {
        self.indicator_flashes
    }

    #[must_use]
    pub const fn content(&self) -> &ViewTree {
        &self.content
    }

    pub const fn content_mut(&mut self) -> &mut ViewTree {
        &mut self.content
    }

    /// Root of the content hierarchy.
    #[must_use]
    pub const fn content_root(&self) -> ViewId {
        self.content_root
    }

    /// Move the viewport to `offset`.
    ///
    /// An animated change starts a [`ScrollAnimation`] advanced by
    /// [`ScrollView::advance`]; an immediate one cancels any running animation.
    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        if self.shows_vertical_scroll_indicator || self.shows_horizontal_scroll_indicator {
            self.indicator_flashes += 1;
        }
        if animated {
            self.animation = Some(ScrollAnimation {
                from: self.content_offset,
                to: offset,
                progress: 0.0,
            });
        } else {
            self.animation = None;
            self.content_offset = offset;
        }
    }

    /// Advance a running animation by `fraction` of its duration.
    pub fn advance(&mut self, fraction: f64) {
        let Some(mut animation) = self.animation else {
            return;
        };
        animation.progress = (animation.progress + fraction).clamp(0.0, 1.0);
        self.content_offset = Point::new(
            animation.from.x + (animation.to.x - animation.from.x) * animation.progress,
            animation.from.y + (animation.to.y - animation.from.y) * animation.progress,
        );
        self.animation = (animation.progress < 1.0).then_some(animation);
    }

    /// Render the part of the content currently inside the frame.
    ///
    /// Returns `None` when the frame is empty.
    #[must_use]
    pub fn render_visible(&self) -> Option<RgbaImage> {
        let mut canvas = Canvas::new(self.frame.size)?;
        let origin = Point::new(-self.content_offset.x, -self.content_offset.y);
        self.content.render(&mut canvas, self.content_root, origin);
        Some(canvas.finish())
    }
}

impl ZzCompatible for ScrollView {}

impl Zz<&mut ScrollView> {
    /// Stop scrolling where the view currently is.
    ///
    /// Re-applies the current offset without animation. The indicators are
    /// hidden meanwhile so the re-application does not flash them; both
    /// indicators are restored afterwards.
    pub fn kill_scroll(&mut self) {
        let offset = self.base.content_offset;
        let shows_vertical = self.base.shows_vertical_scroll_indicator;
        let shows_horizontal = self.base.shows_horizontal_scroll_indicator;

        self.base.shows_vertical_scroll_indicator = false;
        self.base.shows_horizontal_scroll_indicator = false;
        self.base.set_content_offset(offset, false);
        self.base.shows_vertical_scroll_indicator = shows_vertical;
        self.base.shows_horizontal_scroll_indicator = shows_horizontal;
    }

    /// Render the entire content, not just the visible part.
    ///
    /// The frame is stretched to the content size and the offset reset for the
    /// duration of the render; both are restored before returning. Returns
    /// `None` when the content size is empty.
    pub fn snapshot(&mut self) -> Option<RgbaImage> {
        let previous_frame = self.base.frame;
        let previous_offset = self.base.content_offset;

        self.base.frame = Rect {
            origin: previous_frame.origin,
            size: self.base.content_size,
        };
        self.base.content_offset = Point::ZERO;
        let image = self.base.render_visible();

        self.base.frame = previous_frame;
        self.base.content_offset = previous_offset;
        image
    }
}
