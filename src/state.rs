use {
    crate::{
        config::PopupConfig,
        ifs::wl_surface::PopupSurface,
        output::{OutputId, OutputRegistry},
        rect::Rect,
        tree::PopupIds,
    },
    std::rc::Rc,
};

/// The part of the renderer that popups report damage to.
pub trait Renderer {
    /// Damages a rectangle in global coordinates.
    fn damage_box(&self, rect: Rect);

    /// Damages the surface-local damage of `surface`, placed at `(x, y)`.
    fn damage_surface(&self, surface: &Rc<dyn PopupSurface>, x: i32, y: i32);

    /// Invalidates the cached background blur of an output.
    fn mark_blur_dirty(&self, output: OutputId);
}

pub trait InputManager {
    /// Re-evaluates pointer focus as if the pointer had moved in place.
    fn simulate_mouse_movement(&self);
}

pub struct State {
    pub renderer: Rc<dyn Renderer>,
    pub input: Rc<dyn InputManager>,
    pub outputs: Rc<dyn OutputRegistry>,
    pub config: PopupConfig,
    pub popup_ids: PopupIds,
}

impl State {
    pub fn new(
        renderer: Rc<dyn Renderer>,
        input: Rc<dyn InputManager>,
        outputs: Rc<dyn OutputRegistry>,
        config: PopupConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            renderer,
            input,
            outputs,
            config,
            popup_ids: Default::default(),
        })
    }

    pub fn damage(&self, rect: Rect) {
        if self.config.log_damage {
            log::debug!("Damaging {:?}", rect);
        }
        self.renderer.damage_box(rect);
    }
}
