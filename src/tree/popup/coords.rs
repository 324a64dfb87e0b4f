use {
    crate::{ifs::wl_surface::PopupSurface, tree::Popup},
    std::rc::Rc,
};

impl Popup {
    /// The position of the popup's window geometry relative to the origin of
    /// the window or layer surface owning the tree.
    pub fn coords_relative_to_parent(&self) -> (i32, i32) {
        let Some(resource) = self.resource() else {
            return (0, 0);
        };
        let (gx, gy) = resource
            .surface()
            .map(|s| s.geometry().position())
            .unwrap_or_default();
        let (mut x, mut y) = (-gx, -gy);
        let mut step = |node: &Popup| -> Option<Rc<Popup>> {
            let parent = node.parent()?;
            let resource = node.resource()?;
            let (ox, oy) = resource.surface().map(|s| s.offset()).unwrap_or_default();
            let (px, py) = resource.geometry().position();
            x += ox + px;
            y += oy + py;
            Some(parent)
        };
        let mut next = step(self);
        while let Some(node) = next {
            next = step(&*node);
        }
        (x, y)
    }

    /// The position of the popup in global coordinates.
    ///
    /// `None` if the owner of the tree no longer exists.
    pub fn coords_global(&self) -> Option<(i32, i32)> {
        self.local_to_global(self.coords_relative_to_parent())
    }

    pub fn local_to_global(&self, (x, y): (i32, i32)) -> Option<(i32, i32)> {
        let (ax, ay) = self.anchor_position()?;
        Some((ax + x, ay + y))
    }

    /// The live position of the owner of the tree.
    ///
    /// This is read from the animated position since it can be called while
    /// the owner is moving.
    pub fn anchor_position(&self) -> Option<(i32, i32)> {
        self.owner.real_position()
    }

    /// Runs the positioner against the output containing the owner.
    pub(super) fn reposition(&self) {
        let Some(resource) = self.resource() else {
            return;
        };
        let Some((x, y)) = self.anchor_position() else {
            return;
        };
        let Some(output) = self.state.outputs.output_at(x, y) else {
            log::debug!("Cannot position popup {}: no output at {}x{}", self.id, x, y);
            return;
        };
        resource.apply_positioning(output.rect, (x, y));
    }

    pub(super) fn send_scale(&self, surface: &Rc<dyn PopupSurface>) {
        match self.owner.last_scale() {
            Some(scale) => surface.set_preferred_scale(scale),
            _ => log::warn!(
                "Cannot send a preferred scale to popup {}: its owner is gone",
                self.id
            ),
        }
    }
}
