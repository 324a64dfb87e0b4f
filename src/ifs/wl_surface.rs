use {
    crate::{
        ifs::xdg_popup::NewPopupListener,
        output::OutputId,
        rect::{Rect, Region, Size},
        scale::Scale,
        tree::PopupId,
        utils::event_listener::EventSource,
    },
    std::rc::{Rc, Weak},
};

/// Receives the signals of the surface backing a popup.
pub trait PopupSurfaceListener {
    fn mapped(self: Rc<Self>);
    fn unmapped(self: Rc<Self>);
    fn committed(self: Rc<Self>);
    fn destroyed(self: Rc<Self>);
}

/// The subsurfaces attached to a popup.
///
/// Dropping the tree releases it.
pub trait SubsurfaceTree {
    /// Re-evaluates damage for every subsurface after the popup moved or
    /// changed.
    fn recheck_damage(&self);
}

pub trait PopupSurface {
    fn events(&self) -> &EventSource<dyn PopupSurfaceListener>;

    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener>;

    /// The committed window geometry in surface-local coordinates.
    fn geometry(&self) -> Rect;

    /// The committed size of the surface.
    fn size(&self) -> Size;

    /// The committed `wl_surface.offset`.
    fn offset(&self) -> (i32, i32);

    /// The bounding box of the surface and all of its subsurfaces in
    /// surface-local coordinates.
    fn extents(&self) -> Rect;

    fn input_region(&self) -> Rc<Region>;

    /// Whether the current commit is the first commit of the surface.
    fn is_initial_commit(&self) -> bool;

    fn schedule_configure(&self);

    fn is_mapped(&self) -> bool;

    fn set_preferred_scale(&self, scale: Scale);

    fn enter_output(&self, output: OutputId);

    fn create_subsurface_tree(&self) -> Box<dyn SubsurfaceTree>;

    /// Records that the surface belongs to `popup`.
    fn assign_popup(&self, popup: PopupId);

    fn unassign_popup(&self);
}

/// Binds a surface to a popup for as long as the handle lives.
pub struct SurfaceHandle {
    surface: Weak<dyn PopupSurface>,
}

impl SurfaceHandle {
    pub fn assign(surface: &Rc<dyn PopupSurface>, popup: PopupId) -> Self {
        surface.assign_popup(popup);
        Self {
            surface: Rc::downgrade(surface),
        }
    }
}

impl Drop for SurfaceHandle {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.upgrade() {
            surface.unassign_popup();
        }
    }
}
