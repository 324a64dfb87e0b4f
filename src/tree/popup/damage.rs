use {
    crate::{ifs::wl_surface::PopupSurface, rect::Rect, tree::Popup},
    std::rc::Rc,
};

impl Popup {
    /// Damages the bounding box of the surface and its subsurfaces, grown by
    /// the configured margin to cover shadows and borders.
    pub(super) fn damage_extents(&self, surface: &Rc<dyn PopupSurface>, (x, y): (i32, i32)) {
        let rect = surface
            .extents()
            .move_(x, y)
            .expand(self.state.config.damage_margin);
        self.state.damage(rect);
    }

    /// Damages every popup of the subtree that still has a protocol object.
    ///
    /// Descendants stop producing damage once their ancestor is unmapped.
    pub(super) fn damage_subtree(self: &Rc<Self>) {
        let state = self.state.clone();
        self.breadth_first(&mut |p: &Rc<Popup>| {
            if p.resource().is_none() {
                return;
            }
            if let Some(pos) = p.coords_global() {
                state.damage(Rect::at(pos, p.size()));
            }
        });
    }

    /// Popups of layer surfaces below the top layer can change what the
    /// background blur of their output sees.
    pub(super) fn mark_blur_dirty(&self) {
        if let Some(layer) = self.owner.layer() {
            if layer.layer().contributes_to_blur() {
                self.state.renderer.mark_blur_dirty(layer.output());
            }
        }
    }
}
