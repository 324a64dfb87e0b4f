use {
    crate::{
        config::PopupConfig,
        ifs::wl_surface::PopupSurface,
        output::{OutputId, OutputInfo, OutputRegistry},
        rect::Rect,
        state::{InputManager, Renderer, State},
    },
    std::{
        cell::{Cell, RefCell},
        rc::Rc,
    },
};

#[derive(Default)]
pub struct TestRenderer {
    pub boxes: RefCell<Vec<Rect>>,
    pub surfaces: RefCell<Vec<(i32, i32)>>,
    pub blur_dirty: RefCell<Vec<OutputId>>,
}

impl TestRenderer {
    pub fn take_boxes(&self) -> Vec<Rect> {
        self.boxes.take()
    }

    pub fn clear(&self) {
        self.boxes.take();
        self.surfaces.take();
        self.blur_dirty.take();
    }

    /// The number of damage notifications of any kind.
    pub fn damage_calls(&self) -> usize {
        self.boxes.borrow().len() + self.surfaces.borrow().len()
    }
}

impl Renderer for TestRenderer {
    fn damage_box(&self, rect: Rect) {
        self.boxes.borrow_mut().push(rect);
    }

    fn damage_surface(&self, _surface: &Rc<dyn PopupSurface>, x: i32, y: i32) {
        self.surfaces.borrow_mut().push((x, y));
    }

    fn mark_blur_dirty(&self, output: OutputId) {
        self.blur_dirty.borrow_mut().push(output);
    }
}

#[derive(Default)]
pub struct TestInput {
    pub mouse_moves: Cell<u32>,
}

impl InputManager for TestInput {
    fn simulate_mouse_movement(&self) {
        self.mouse_moves.set(self.mouse_moves.get() + 1);
    }
}

#[derive(Default)]
pub struct TestOutputs {
    pub outputs: RefCell<Vec<OutputInfo>>,
}

impl TestOutputs {
    pub fn add(&self, id: u32, rect: Rect) {
        self.outputs.borrow_mut().push(OutputInfo {
            id: OutputId(id),
            rect,
        });
    }
}

impl OutputRegistry for TestOutputs {
    fn output_at(&self, x: i32, y: i32) -> Option<OutputInfo> {
        self.outputs
            .borrow()
            .iter()
            .find(|o| o.rect.contains(x, y))
            .copied()
    }
}

pub struct TestState {
    pub state: Rc<State>,
    pub renderer: Rc<TestRenderer>,
    pub input: Rc<TestInput>,
    pub outputs: Rc<TestOutputs>,
}

impl TestState {
    /// A state with a single 1920x1080 output at the origin.
    pub fn new() -> Self {
        Self::with_config(PopupConfig::default())
    }

    pub fn with_config(config: PopupConfig) -> Self {
        let renderer = Rc::new(TestRenderer::default());
        let input = Rc::new(TestInput::default());
        let outputs = Rc::new(TestOutputs::default());
        outputs.add(1, Rect::new_sized(0, 0, 1920, 1080).unwrap());
        let state = State::new(renderer.clone(), input.clone(), outputs.clone(), config);
        Self {
            state,
            renderer,
            input,
            outputs,
        }
    }
}
