use {
    crate::{
        ifs::{
            wl_surface::{
                PopupSurface, PopupSurfaceListener, SubsurfaceTree, SurfaceHandle,
            },
            xdg_popup::{NewPopupListener, PopupResource, PopupResourceListener},
            zwlr_layer_surface_v1::LayerAnchor,
        },
        rect::{Rect, Size},
        state::State,
        tree::{PopupOwner, WindowAnchor},
        utils::event_listener::EventListener,
    },
    std::{
        cell::{Cell, RefCell},
        fmt::{Debug, Formatter},
        ptr,
        rc::{Rc, Weak},
    },
};
pub use {hit_test::HitMode, walker::PopupVisitor};

mod coords;
mod damage;
mod listeners;
mod walker;

linear_ids!(PopupIds, PopupId);

/// A node in the tree of popups attached to a window or layer surface.
///
/// The root of the tree has no protocol object. It only listens for the
/// popups created directly on top of its owner. Every other node corresponds
/// to one `xdg_popup`.
pub struct Popup {
    id: PopupId,
    state: Rc<State>,
    owner: PopupOwner,
    parent: Option<Weak<Popup>>,
    children: RefCell<Vec<Rc<Popup>>>,
    resource: Option<Weak<dyn PopupResource>>,
    surface: RefCell<Option<SurfaceHandle>>,
    subsurfaces: RefCell<Option<Box<dyn SubsurfaceTree>>>,
    last_size: Cell<Size>,
    last_pos: Cell<(i32, i32)>,
    mapped: Cell<bool>,
    inert: Cell<bool>,
    reposition_requested: Cell<bool>,
    new_popup_listener: EventListener<dyn NewPopupListener>,
    resource_listener: EventListener<dyn PopupResourceListener>,
    surface_listener: EventListener<dyn PopupSurfaceListener>,
}

impl Debug for Popup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("id", &self.id)
            .field("mapped", &self.mapped.get())
            .field("inert", &self.inert.get())
            .finish_non_exhaustive()
    }
}

impl Popup {
    /// Creates the root of the popup tree of a window.
    pub fn new_for_window(state: &Rc<State>, window: &Rc<dyn WindowAnchor>) -> Rc<Self> {
        Self::new_for_owner(state, PopupOwner::Window(Rc::downgrade(window)))
    }

    /// Creates the root of the popup tree of a layer surface.
    pub fn new_for_layer(state: &Rc<State>, layer: &Rc<dyn LayerAnchor>) -> Rc<Self> {
        Self::new_for_owner(state, PopupOwner::Layer(Rc::downgrade(layer)))
    }

    /// Creates the root of a popup tree.
    ///
    /// The owner must still exist.
    pub fn new_for_owner(state: &Rc<State>, owner: PopupOwner) -> Rc<Self> {
        let slf = Rc::new_cyclic(|slf| Self::new_(state, owner, None, None, slf));
        slf.init_all_signals();
        slf
    }

    fn new_child(self: &Rc<Self>, resource: &Rc<dyn PopupResource>) -> Rc<Self> {
        let child = Rc::new_cyclic(|slf| {
            Self::new_(
                &self.state,
                self.owner.clone(),
                Some(Rc::downgrade(self)),
                Some(Rc::downgrade(resource)),
                slf,
            )
        });
        if let Some(surface) = resource.surface() {
            child.last_size.set(surface.geometry().size());
            *child.surface.borrow_mut() = Some(SurfaceHandle::assign(&surface, child.id));
        }
        child.reposition();
        child.init_all_signals();
        child
    }

    fn new_(
        state: &Rc<State>,
        owner: PopupOwner,
        parent: Option<Weak<Popup>>,
        resource: Option<Weak<dyn PopupResource>>,
        slf: &Weak<Popup>,
    ) -> Self {
        Self {
            id: state.popup_ids.next(),
            state: state.clone(),
            owner,
            parent,
            children: Default::default(),
            resource,
            surface: Default::default(),
            subsurfaces: Default::default(),
            last_size: Default::default(),
            last_pos: Default::default(),
            mapped: Cell::new(false),
            inert: Cell::new(false),
            reposition_requested: Cell::new(false),
            new_popup_listener: EventListener::<dyn NewPopupListener>::new(slf.clone()),
            resource_listener: EventListener::<dyn PopupResourceListener>::new(slf.clone()),
            surface_listener: EventListener::<dyn PopupSurfaceListener>::new(slf.clone()),
        }
    }

    pub fn id(&self) -> PopupId {
        self.id
    }

    pub fn owner(&self) -> &PopupOwner {
        &self.owner
    }

    pub fn parent(&self) -> Option<Rc<Popup>> {
        self.parent.as_ref()?.upgrade()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A snapshot of the children in creation order.
    pub fn children(&self) -> Vec<Rc<Popup>> {
        self.children.borrow().clone()
    }

    pub fn resource(&self) -> Option<Rc<dyn PopupResource>> {
        self.resource.as_ref()?.upgrade()
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped.get()
    }

    pub fn is_inert(&self) -> bool {
        self.inert.get()
    }

    pub fn is_reposition_requested(&self) -> bool {
        self.reposition_requested.get()
    }

    /// The size of the surface at the time of the last map, unmap or commit.
    pub fn size(&self) -> Size {
        self.last_size.get()
    }

    /// Whether the owner of the tree is currently shown.
    pub fn visible(&self) -> bool {
        match &self.owner {
            PopupOwner::Window(w) => {
                if let Some(w) = w.upgrade() {
                    return w.is_mapped() && w.workspace_visible();
                }
            }
            PopupOwner::Layer(_) => {
                if !self.owner.is_vacant() {
                    return true;
                }
            }
        }
        match self.parent() {
            Some(parent) => parent.visible(),
            _ => false,
        }
    }

    /// The protocol object and its surface, if both are still alive.
    fn live(&self) -> Option<(Rc<dyn PopupResource>, Rc<dyn PopupSurface>)> {
        let resource = self.resource()?;
        let surface = resource.surface()?;
        Some((resource, surface))
    }

    fn on_new_popup(self: &Rc<Self>, resource: &Rc<dyn PopupResource>) {
        if self.inert.get() {
            return;
        }
        let child = self.new_child(resource);
        log::debug!("New popup {} (parent {})", child.id, self.id);
        self.children.borrow_mut().push(child);
    }

    fn on_destroy(&self) {
        if !self.inert.replace(true) {
            log::debug!("Popup {} destroyed", self.id);
        }
        self.mapped.set(false);
        self.new_popup_listener.detach();
        self.resource_listener.detach();
        self.surface_listener.detach();
        self.subsurfaces.take();
        self.surface.take();
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .children
            .borrow_mut()
            .retain(|c| !ptr::eq(&**c, self));
    }

    fn on_map(self: &Rc<Self>) {
        if self.inert.get() || self.mapped.get() {
            return;
        }
        let Some((_, surface)) = self.live() else {
            log::error!("Popup {} is orphaned (no surface or resource) and maps", self.id);
            self.on_destroy();
            return;
        };
        self.mapped.set(true);
        self.last_size.set(surface.size());
        let coords = self.coords_global();
        if let Some(coords) = coords {
            self.damage_extents(&surface, coords);
        }
        self.last_pos.set(self.coords_relative_to_parent());
        self.state.input.simulate_mouse_movement();
        *self.subsurfaces.borrow_mut() = Some(surface.create_subsurface_tree());
        self.send_scale(&surface);
        if let Some((x, y)) = coords {
            if let Some(output) = self.state.outputs.output_at(x, y) {
                surface.enter_output(output.id);
            }
        }
        self.mark_blur_dirty();
    }

    fn on_unmap(self: &Rc<Self>) {
        if self.inert.get() || !self.mapped.get() {
            return;
        }
        let Some((_, surface)) = self.live() else {
            log::error!("Popup {} is orphaned (no surface or resource) and unmaps", self.id);
            self.on_destroy();
            return;
        };
        self.mapped.set(false);
        self.last_size.set(surface.size());
        if let Some(coords) = self.coords_global() {
            self.damage_extents(&surface, coords);
        }
        self.subsurfaces.take();
        self.state.input.simulate_mouse_movement();
        self.mark_blur_dirty();
        self.damage_subtree();
    }

    fn on_commit(self: &Rc<Self>, ignore_siblings: bool) {
        if self.inert.get() {
            return;
        }
        let Some((_, surface)) = self.live() else {
            log::error!("Popup {} is orphaned (no surface or resource) and commits", self.id);
            self.on_destroy();
            return;
        };
        if surface.is_initial_commit() {
            surface.schedule_configure();
            return;
        }
        if let Some(window) = self.owner.window() {
            if !window.is_mapped() || !window.workspace_visible() {
                self.last_size.set(surface.size());
                if self.state.config.log_damage {
                    log::debug!(
                        "Refusing to commit damage from popup {} of `{}` because it's invisible",
                        self.id,
                        window.title(),
                    );
                }
                return;
            }
        }
        if !surface.is_mapped() {
            return;
        }
        let Some(coords) = self.coords_global() else {
            log::trace!("Popup {} commits but its owner is gone", self.id);
            return;
        };
        let local = self.coords_relative_to_parent();
        let size = surface.size();
        if self.last_size.get() != size
            || self.reposition_requested.get()
            || self.last_pos.get() != local
        {
            if let Some(old) = self.local_to_global(self.last_pos.get()) {
                self.state.damage(Rect::at(old, self.last_size.get()));
            }
            self.last_size.set(size);
            self.state.damage(Rect::at(coords, size));
            self.last_pos.set(local);
        }
        if !ignore_siblings {
            if let Some(subsurfaces) = &*self.subsurfaces.borrow() {
                subsurfaces.recheck_damage();
            }
        }
        self.state
            .renderer
            .damage_surface(&surface, coords.0, coords.1);
        self.reposition_requested.set(false);
        self.mark_blur_dirty();
    }

    fn on_reposition(&self) {
        if self.inert.get() {
            return;
        }
        log::debug!("Popup {} requests reposition", self.id);
        self.reposition_requested.set(true);
        self.last_pos.set(self.coords_relative_to_parent());
        self.reposition();
    }

    fn on_dismissed(self: &Rc<Self>) {
        log::debug!("Popup {} dismissed", self.id);
        self.on_unmap();
        self.on_destroy();
    }

    /// Re-runs the commit logic of every popup in the tree, starting below the
    /// root.
    ///
    /// Used after the owner moved so that every popup re-evaluates its damage.
    pub fn recheck_tree(self: &Rc<Self>) {
        let mut root = self.clone();
        while let Some(parent) = root.parent() {
            root = parent;
        }
        root.recheck_children_recursive();
    }

    fn recheck_children_recursive(&self) {
        let children = self.children();
        for child in children {
            child.on_commit(true);
            child.recheck_children_recursive();
        }
    }
}
