//! Buttons with an image and a title.

use super::{EdgeInsets, Size};
use crate::compat::{Zz, ZzCompatible};

/// Layout state of a button.
///
/// The title is measured by the caller; `title_size` holds the size the
/// title occupies with the button's font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    pub image_size: Option<Size>,
    pub title: Option<String>,
    pub title_size: Option<Size>,
    pub image_edge_insets: EdgeInsets,
    pub title_edge_insets: EdgeInsets,
    pub content_edge_insets: EdgeInsets,
}

impl Button {
    #[must_use]
    pub fn new(title: impl Into<String>, title_size: Size) -> Self {
        Self {
            title: Some(title.into()),
            title_size: Some(title_size),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_image(mut self, image_size: Size) -> Self {
        self.image_size = Some(image_size);
        self
    }
}

impl ZzCompatible for Button {}

impl Zz<&mut Button> {
    /// Center image and title, either side by side or stacked.
    ///
    /// Side by side, the two are pushed `spacing` apart and the content grows
    /// to fit. Stacked, the image sits above the title; that layout needs the
    /// image and a measured title and leaves the button untouched otherwise.
    pub fn center_text_and_image(&mut self, image_above_text: bool, spacing: f64) {
        let button = &mut *self.base;

        if !image_above_text {
            let inset = spacing / 2.0;
            button.image_edge_insets = EdgeInsets::new(0.0, -inset, 0.0, inset);
            button.title_edge_insets = EdgeInsets::new(0.0, inset, 0.0, -inset);
            button.content_edge_insets = EdgeInsets::new(0.0, inset, 0.0, inset);
            return;
        }

        let (Some(image), Some(_), Some(title)) =
            (button.image_size, button.title.as_ref(), button.title_size)
        else {
            return;
        };

        let title_offset = -(image.height + spacing);
        button.title_edge_insets = EdgeInsets::new(0.0, -image.width, title_offset, 0.0);

        let image_offset = -(title.height + spacing);
        button.image_edge_insets = EdgeInsets::new(image_offset, 0.0, 0.0, -title.width);

        let edge_offset = (title.height - image.height).abs() / 2.0;
        button.content_edge_insets = EdgeInsets::new(edge_offset, 0.0, edge_offset, 0.0);
    }
}
