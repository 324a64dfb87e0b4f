use {
    crate::{
        ifs::{
            wl_surface::PopupSurfaceListener,
            xdg_popup::{NewPopupListener, PopupResource, PopupResourceListener},
        },
        tree::{Popup, PopupOwner},
    },
    std::rc::Rc,
};

impl Popup {
    pub(super) fn init_all_signals(&self) {
        let Some(resource) = &self.resource else {
            match &self.owner {
                PopupOwner::Window(w) => match w.upgrade() {
                    Some(w) => self.new_popup_listener.attach(w.new_popup_events()),
                    _ => fatal!("Popup tree {} created for a window that no longer exists", self.id),
                },
                PopupOwner::Layer(l) => match l.upgrade() {
                    Some(l) => self.new_popup_listener.attach(l.new_popup_events()),
                    _ => fatal!(
                        "Popup tree {} created for a layer surface that no longer exists",
                        self.id
                    ),
                },
            }
            return;
        };
        let Some(resource) = resource.upgrade() else {
            log::warn!("Popup {} was created for a destroyed xdg_popup", self.id);
            return;
        };
        self.resource_listener.attach(resource.events());
        match resource.surface() {
            Some(surface) => {
                self.surface_listener.attach(surface.events());
                self.new_popup_listener.attach(surface.new_popup_events());
            }
            _ => log::warn!("Popup {} was created without a surface", self.id),
        }
    }
}

impl NewPopupListener for Popup {
    fn new_popup(self: Rc<Self>, popup: &Rc<dyn PopupResource>) {
        self.on_new_popup(popup);
    }
}

impl PopupResourceListener for Popup {
    fn repositioned(self: Rc<Self>) {
        self.on_reposition();
    }

    fn dismissed(self: Rc<Self>) {
        self.on_dismissed();
    }
}

impl PopupSurfaceListener for Popup {
    fn mapped(self: Rc<Self>) {
        self.on_map();
    }

    fn unmapped(self: Rc<Self>) {
        self.on_unmap();
    }

    fn committed(self: Rc<Self>) {
        self.on_commit(false);
    }

    fn destroyed(self: Rc<Self>) {
        self.on_destroy();
    }
}
