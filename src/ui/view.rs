//! View hierarchy.
//!
//! Views live in a [`ViewTree`] and refer to each other by [`ViewId`]. A view
//! records its kind (any type implementing [`ViewKind`]) so that ancestors can
//! be looked up by type, and may be the root view of a named controller.
//! Rounded corners mask the view together with its subviews when rendered.

use std::any::{TypeId, type_name};

use image::RgbaImage;

use super::{Canvas, Color, Corners, Point, Rect, RoundedRect};
use crate::compat::{Zz, ZzCompatible};

/// Marker for view types.
pub trait ViewKind: 'static {}

/// The kind of views added without a more specific type.
#[derive(Debug)]
pub struct PlainView;

impl ViewKind for PlainView {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

/// A node of the hierarchy.
#[derive(Debug)]
pub struct View {
    /// Position and size in the superview's coordinate space.
    pub frame: Rect,
    pub background: Option<Color>,
    /// Opaque views render onto a black backdrop instead of a transparent one.
    pub is_opaque: bool,
    pub is_hidden: bool,
    /// Corners masked to a quarter circle of `corner_radius`.
    pub rounded_corners: Corners,
    pub corner_radius: f64,
    controller: Option<String>,
    kind: TypeId,
    kind_name: &'static str,
    superview: Option<ViewId>,
    subviews: Vec<ViewId>,
}

impl View {
    /// The view's own coordinate space: its frame size at the origin.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.frame.size)
    }

    /// Name of the controller this view is the root view of.
    #[must_use]
    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// Type name of the view's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    #[must_use]
    pub const fn superview(&self) -> Option<ViewId> {
        self.superview
    }

    #[must_use]
    pub fn subviews(&self) -> &[ViewId] {
        &self.subviews
    }

    fn is_kind<K: ViewKind>(&self) -> bool {
        self.kind == TypeId::of::<K>()
    }

    /// The rounded-corner mask placed at `origin`, if any corner is rounded.
    fn corner_mask(&self, origin: Point) -> Option<RoundedRect> {
        (!self.rounded_corners.is_empty() && self.corner_radius > 0.0).then(|| {
            RoundedRect::new(
                self.bounds().offset_by(origin.x, origin.y),
                self.rounded_corners,
                self.corner_radius,
            )
        })
    }
}

/// Owns every view of one window or offscreen hierarchy.
#[derive(Debug, Default)]
pub struct ViewTree {
    views: Vec<View>,
    first_responder: Option<ViewId>,
}

impl ViewTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root [`PlainView`].
    pub fn add_root(&mut self, frame: Rect) -> ViewId {
        self.add_root_of::<PlainView>(frame)
    }

    /// Add a root view of kind `K`.
    pub fn add_root_of<K: ViewKind>(&mut self, frame: Rect) -> ViewId {
        self.insert::<K>(None, frame)
    }

    /// Add a [`PlainView`] under `parent`.
    ///
    /// Returns `None` when `parent` does not belong to this tree.
    pub fn add_view(&mut self, parent: ViewId, frame: Rect) -> Option<ViewId> {
        self.add_view_of::<PlainView>(parent, frame)
    }

    /// Add a view of kind `K` under `parent`.
    ///
    /// Returns `None` when `parent` does not belong to this tree.
    pub fn add_view_of<K: ViewKind>(&mut self, parent: ViewId, frame: Rect) -> Option<ViewId> {
        self.view(parent)?;
        let id = self.insert::<K>(Some(parent), frame);
        if let Some(superview) = self.view_mut(parent) {
            superview.subviews.push(id);
        }
        Some(id)
    }

    fn insert<K: ViewKind>(&mut self, superview: Option<ViewId>, frame: Rect) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(View {
            frame,
            background: None,
            is_opaque: false,
            is_hidden: false,
            rounded_corners: Corners::NONE,
            corner_radius: 0.0,
            controller: None,
            kind: TypeId::of::<K>(),
            kind_name: type_name::<K>(),
            superview,
            subviews: Vec::new(),
        });
        id
    }

    #[must_use]
    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id.0)
    }

    /// A handle for calling helpers on one view.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<ViewRef<'_>> {
        self.view(id).map(|_| ViewRef { tree: self, id })
    }

    /// A handle for calling mutating helpers on one view.
    pub fn get_mut(&mut self, id: ViewId) -> Option<ViewMut<'_>> {
        self.view(id)?;
        Some(ViewMut { tree: self, id })
    }

    /// Make `id` the root view of the controller called `name`.
    pub fn set_controller(&mut self, id: ViewId, name: impl Into<String>) {
        if let Some(view) = self.view_mut(id) {
            view.controller = Some(name.into());
        }
    }

    /// Give `id` focus. Returns `false` when the view does not exist.
    pub fn become_first_responder(&mut self, id: ViewId) -> bool {
        if self.view(id).is_none() {
            return false;
        }
        self.first_responder = Some(id);
        true
    }

    pub fn resign_first_responder(&mut self) {
        self.first_responder = None;
    }

    #[must_use]
    pub fn is_first_responder(&self, id: ViewId) -> bool {
        self.first_responder == Some(id)
    }

    /// Ancestors of `id`, nearest first, not including `id`.
    pub fn ancestors(&self, id: ViewId) -> impl Iterator<Item = ViewId> + '_ {
        std::iter::successors(self.view(id).and_then(View::superview), |current| {
            self.view(*current).and_then(View::superview)
        })
    }

    /// Draw `id` and its visible subviews with the view's origin at `origin`.
    pub(crate) fn render(&self, canvas: &mut Canvas, id: ViewId, origin: Point) {
        let Some(view) = self.view(id) else {
            return;
        };
        if view.is_hidden {
            return;
        }

        let mask = view.corner_mask(origin);
        if let Some(mask) = mask {
            canvas.push_clip(mask);
        }

        if let Some(background) = view.background {
            canvas.fill(view.bounds().offset_by(origin.x, origin.y), background);
        }
        for child in &view.subviews {
            if let Some(frame) = self.view(*child).map(|v| v.frame) {
                let child_origin = Point::new(origin.x + frame.origin.x, origin.y + frame.origin.y);
                self.render(canvas, *child, child_origin);
            }
        }

        if mask.is_some() {
            canvas.pop_clip();
        }
    }
}

/// One view together with the tree it lives in.
#[derive(Debug, Clone, Copy)]
pub struct ViewRef<'t> {
    tree: &'t ViewTree,
    id: ViewId,
}

impl<'t> ViewRef<'t> {
    #[must_use]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    #[must_use]
    pub const fn tree(&self) -> &'t ViewTree {
        self.tree
    }
}

/// One view with exclusive access to its tree.
#[derive(Debug)]
pub struct ViewMut<'t> {
    tree: &'t mut ViewTree,
    id: ViewId,
}

impl ViewMut<'_> {
    #[must_use]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    /// Shared access to the handle's view.
    #[must_use]
    pub const fn view_ref(&self) -> ViewRef<'_> {
        ViewRef {
            tree: &*self.tree,
            id: self.id,
        }
    }
}

impl ZzCompatible for ViewRef<'_> {}

impl ZzCompatible for ViewMut<'_> {}

impl Zz<&mut ViewMut<'_>> {
    /// Mask `corners` of the view to quarter circles of `radius`.
    ///
    /// The mask applies to the view's background and to every subview when
    /// rendered. It replaces any earlier mask; [`Corners::NONE`] or a radius of
    /// zero removes it.
    pub fn round_corners(&mut self, corners: Corners, radius: f64) {
        let id = self.base.id;
        if let Some(view) = self.base.tree.view_mut(id) {
            view.rounded_corners = corners;
            view.corner_radius = radius;
        }
    }
}

impl<'t> Zz<&ViewRef<'t>> {
    /// Name of the controller responsible for the view.
    ///
    /// Walks up from the superview and returns the first controller whose
    /// root view is on the way.
    #[must_use]
    pub fn parent_controller(&self) -> Option<&'t str> {
        let tree = self.base.tree;
        tree.ancestors(self.base.id)
            .find_map(|id| tree.view(id).and_then(View::controller))
    }

    /// The focused view among this view and its descendants, depth first.
    #[must_use]
    pub fn first_responder(&self) -> Option<ViewId> {
        let tree = self.base.tree;
        let mut pending = vec![self.base.id];
        while let Some(id) = pending.pop() {
            if tree.is_first_responder(id) {
                return Some(id);
            }
            if let Some(view) = tree.view(id) {
                pending.extend(view.subviews.iter().rev());
            }
        }
        None
    }

    /// The nearest ancestor whose kind is `K`.
    #[must_use]
    pub fn parent_view_of<K: ViewKind>(&self) -> Option<ViewId> {
        let tree = self.base.tree;
        tree.ancestors(self.base.id)
            .find(|id| tree.view(*id).is_some_and(View::is_kind::<K>))
    }

    /// Render the view and its visible subviews into an image of its bounds.
    ///
    /// Returns `None` when the bounds are empty.
    #[must_use]
    pub fn snapshot(&self) -> Option<RgbaImage> {
        let tree = self.base.tree;
        let view = tree.view(self.base.id)?;
        let mut canvas = Canvas::new(view.frame.size)?;
        if view.is_opaque {
            canvas.fill(view.bounds(), Color::BLACK);
        }
        tree.render(&mut canvas, self.base.id, Point::ZERO);
        Some(canvas.finish())
    }
}
