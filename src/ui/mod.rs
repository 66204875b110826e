//! UI helpers.
//!
//! The platform collaborators (views, scroll views, table views, buttons and
//! offscreen drawing) are modelled by small types in this module so that the
//! helpers can be expressed and tested without a windowing system.
//!
//! ## Main Parts
//!
//! - [`Color`] and [`AdaptiveColor`] - RGBA colors, hex parsing, light/dark variants
//! - [`Canvas`] - an offscreen RGBA drawing surface scoped to one operation
//! - [`imaging`] - solid fills and resizing of [`::image::RgbaImage`]
//! - [`ViewTree`] - a view hierarchy with snapshots, rounded corners and ancestor/descendant lookups
//! - [`ScrollView`], [`TableView`], [`Button`] - control-specific helpers

pub mod button;
pub mod canvas;
pub mod color;
pub mod geometry;
pub mod imaging;
pub mod scroll;
pub mod table;
pub mod view;

pub use button::Button;
pub use canvas::Canvas;
pub use color::{AdaptiveColor, Appearance, Color};
pub use geometry::{Corners, EdgeInsets, Point, Rect, RoundedRect, Size};
pub use scroll::ScrollView;
pub use table::{IndexPath, TableCell, TableView};
pub use view::{View, ViewId, ViewKind, ViewMut, ViewRef, ViewTree};
