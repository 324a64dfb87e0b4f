use crate::{
    ifs::xdg_popup::NewPopupListener, output::OutputId, scale::Scale,
    utils::event_listener::EventSource,
};

const BACKGROUND: u32 = 0;
const BOTTOM: u32 = 1;
const TOP: u32 = 2;
const OVERLAY: u32 = 3;

/// The layers of the layer shell, ordered from back to front.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    Background,
    Bottom,
    Top,
    Overlay,
}

impl Layer {
    pub fn from_raw(raw: u32) -> Option<Self> {
        let layer = match raw {
            BACKGROUND => Self::Background,
            BOTTOM => Self::Bottom,
            TOP => Self::Top,
            OVERLAY => Self::Overlay,
            _ => return None,
        };
        Some(layer)
    }

    /// Whether the blurred background of the output is computed from surfaces
    /// in this layer.
    pub fn contributes_to_blur(self) -> bool {
        self < Self::Top
    }
}

/// A layer-shell surface that can own a popup tree.
pub trait LayerAnchor {
    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener>;

    /// The current, possibly animated, position of the surface.
    fn real_position(&self) -> (i32, i32);

    fn last_scale(&self) -> Scale;

    fn layer(&self) -> Layer;

    fn output(&self) -> OutputId;
}
