use {
    crate::{ifs::wl_surface::PopupSurface, rect::Rect, utils::event_listener::EventSource},
    std::rc::Rc,
};

/// Receives the signals of an `xdg_popup` object.
pub trait PopupResourceListener {
    /// The client requested a new position through `xdg_popup.reposition`.
    fn repositioned(self: Rc<Self>);

    /// The compositor dismissed the popup (`xdg_popup.popup_done`).
    fn dismissed(self: Rc<Self>);
}

/// Receives popups created on top of a window, layer surface or popup.
pub trait NewPopupListener {
    fn new_popup(self: Rc<Self>, popup: &Rc<dyn PopupResource>);
}

/// The protocol side of a popup.
pub trait PopupResource {
    fn events(&self) -> &EventSource<dyn PopupResourceListener>;

    /// The surface of the popup. `None` once the surface has been destroyed.
    fn surface(&self) -> Option<Rc<dyn PopupSurface>>;

    /// The position of the popup relative to its parent, as computed by the
    /// positioner, and the size it was configured with.
    fn geometry(&self) -> Rect;

    /// Runs the positioner.
    ///
    /// `bounds` is the rectangle of the output the popup should stay within,
    /// in global coordinates. `origin` is the global position of the window or
    /// layer surface the popup tree is attached to.
    fn apply_positioning(&self, bounds: Rect, origin: (i32, i32));
}
