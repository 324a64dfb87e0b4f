use {
    crate::{
        ifs::{xdg_popup::NewPopupListener, zwlr_layer_surface_v1::LayerAnchor},
        scale::Scale,
        utils::event_listener::EventSource,
    },
    std::rc::{Rc, Weak},
};

/// A toplevel window that can own a popup tree.
pub trait WindowAnchor {
    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener>;

    /// The current, possibly animated, position of the window.
    fn real_position(&self) -> (i32, i32);

    /// The scale of the output the window was last shown on.
    fn last_scale(&self) -> Scale;

    fn is_mapped(&self) -> bool;

    /// Whether the workspace of the window is currently shown.
    fn workspace_visible(&self) -> bool;

    fn title(&self) -> String {
        String::new()
    }
}

/// The window or layer surface a popup tree is attached to.
#[derive(Clone)]
pub enum PopupOwner {
    Window(Weak<dyn WindowAnchor>),
    Layer(Weak<dyn LayerAnchor>),
}

impl PopupOwner {
    pub fn window(&self) -> Option<Rc<dyn WindowAnchor>> {
        match self {
            Self::Window(w) => w.upgrade(),
            Self::Layer(_) => None,
        }
    }

    pub fn layer(&self) -> Option<Rc<dyn LayerAnchor>> {
        match self {
            Self::Window(_) => None,
            Self::Layer(l) => l.upgrade(),
        }
    }

    /// Whether the owner has been destroyed.
    pub fn is_vacant(&self) -> bool {
        match self {
            Self::Window(w) => w.strong_count() == 0,
            Self::Layer(l) => l.strong_count() == 0,
        }
    }

    /// The current position of the owner. `None` if it has been destroyed.
    pub fn real_position(&self) -> Option<(i32, i32)> {
        match self {
            Self::Window(w) => w.upgrade().map(|w| w.real_position()),
            Self::Layer(l) => l.upgrade().map(|l| l.real_position()),
        }
    }

    pub fn last_scale(&self) -> Option<Scale> {
        match self {
            Self::Window(w) => w.upgrade().map(|w| w.last_scale()),
            Self::Layer(l) => l.upgrade().map(|l| l.last_scale()),
        }
    }
}
