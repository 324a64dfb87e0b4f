use {
    crate::{
        ifs::{
            wl_surface::{PopupSurface, PopupSurfaceListener, SubsurfaceTree},
            xdg_popup::{NewPopupListener, PopupResource, PopupResourceListener},
            zwlr_layer_surface_v1::{Layer, LayerAnchor},
        },
        output::OutputId,
        rect::{Rect, Region, Size},
        scale::Scale,
        tree::{PopupId, WindowAnchor},
        utils::event_listener::EventSource,
    },
    std::{
        cell::{Cell, RefCell},
        rc::Rc,
    },
};

fn emit_new_popup(source: &EventSource<dyn NewPopupListener>, popup: &Rc<TestPopup>) {
    let popup: Rc<dyn PopupResource> = popup.clone();
    for l in source.iter() {
        l.new_popup(&popup);
    }
}

pub struct TestWindow {
    pub new_popup: EventSource<dyn NewPopupListener>,
    pub position: Cell<(i32, i32)>,
    pub scale: Cell<Scale>,
    pub mapped: Cell<bool>,
    pub workspace_visible: Cell<bool>,
}

impl TestWindow {
    pub fn new(x: i32, y: i32) -> Rc<Self> {
        Rc::new(Self {
            new_popup: Default::default(),
            position: Cell::new((x, y)),
            scale: Cell::new(Scale::default()),
            mapped: Cell::new(true),
            workspace_visible: Cell::new(true),
        })
    }

    pub fn create_popup(&self, popup: &Rc<TestPopup>) {
        emit_new_popup(&self.new_popup, popup);
    }
}

impl WindowAnchor for TestWindow {
    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener> {
        &self.new_popup
    }

    fn real_position(&self) -> (i32, i32) {
        self.position.get()
    }

    fn last_scale(&self) -> Scale {
        self.scale.get()
    }

    fn is_mapped(&self) -> bool {
        self.mapped.get()
    }

    fn workspace_visible(&self) -> bool {
        self.workspace_visible.get()
    }

    fn title(&self) -> String {
        "test window".to_string()
    }
}

pub struct TestLayer {
    pub new_popup: EventSource<dyn NewPopupListener>,
    pub position: Cell<(i32, i32)>,
    pub scale: Cell<Scale>,
    pub layer: Cell<Layer>,
    pub output: OutputId,
}

impl TestLayer {
    pub fn new(x: i32, y: i32, layer: Layer) -> Rc<Self> {
        Rc::new(Self {
            new_popup: Default::default(),
            position: Cell::new((x, y)),
            scale: Cell::new(Scale::default()),
            layer: Cell::new(layer),
            output: OutputId(1),
        })
    }

    pub fn create_popup(&self, popup: &Rc<TestPopup>) {
        emit_new_popup(&self.new_popup, popup);
    }
}

impl LayerAnchor for TestLayer {
    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener> {
        &self.new_popup
    }

    fn real_position(&self) -> (i32, i32) {
        self.position.get()
    }

    fn last_scale(&self) -> Scale {
        self.scale.get()
    }

    fn layer(&self) -> Layer {
        self.layer.get()
    }

    fn output(&self) -> OutputId {
        self.output
    }
}

#[derive(Default)]
pub struct SubsurfaceStats {
    pub created: Cell<u32>,
    pub live: Cell<u32>,
    pub rechecks: Cell<u32>,
}

pub struct TestSubsurfaces {
    stats: Rc<SubsurfaceStats>,
}

impl SubsurfaceTree for TestSubsurfaces {
    fn recheck_damage(&self) {
        self.stats.rechecks.set(self.stats.rechecks.get() + 1);
    }
}

impl Drop for TestSubsurfaces {
    fn drop(&mut self) {
        self.stats.live.set(self.stats.live.get() - 1);
    }
}

pub struct TestSurface {
    pub events: EventSource<dyn PopupSurfaceListener>,
    pub new_popup: EventSource<dyn NewPopupListener>,
    pub geometry: Cell<Rect>,
    pub size: Cell<Size>,
    pub offset: Cell<(i32, i32)>,
    pub input: RefCell<Rc<Region>>,
    pub initial_commit: Cell<bool>,
    pub configures: Cell<u32>,
    pub mapped: Cell<bool>,
    pub preferred_scale: Cell<Option<Scale>>,
    pub entered: RefCell<Vec<OutputId>>,
    pub subsurfaces: Rc<SubsurfaceStats>,
    pub assigned: Cell<Option<PopupId>>,
}

impl TestSurface {
    /// A surface whose window geometry covers the whole surface.
    pub fn new(width: i32, height: i32) -> Rc<Self> {
        Rc::new(Self {
            events: Default::default(),
            new_popup: Default::default(),
            geometry: Cell::new(Rect::new_sized(0, 0, width, height).unwrap()),
            size: Cell::new(Size::new(width, height).unwrap()),
            offset: Cell::new((0, 0)),
            input: RefCell::new(Region::infinite()),
            initial_commit: Cell::new(true),
            configures: Cell::new(0),
            mapped: Cell::new(false),
            preferred_scale: Cell::new(None),
            entered: Default::default(),
            subsurfaces: Default::default(),
            assigned: Cell::new(None),
        })
    }

    fn emit(&self, f: impl Fn(Rc<dyn PopupSurfaceListener>)) {
        for l in self.events.iter() {
            f(l);
        }
    }

    /// Commits the first buffer and maps the surface.
    pub fn map(&self) {
        self.commit();
        self.mapped.set(true);
        self.emit(|l| l.mapped());
        self.commit();
    }

    pub fn unmap(&self) {
        self.mapped.set(false);
        self.emit(|l| l.unmapped());
    }

    pub fn commit(&self) {
        self.emit(|l| l.committed());
        self.initial_commit.set(false);
    }

    pub fn destroy(&self) {
        self.emit(|l| l.destroyed());
    }

    pub fn resize(&self, width: i32, height: i32) {
        self.size.set(Size::new(width, height).unwrap());
        self.geometry
            .set(Rect::new_sized(0, 0, width, height).unwrap());
    }

    pub fn create_popup(&self, popup: &Rc<TestPopup>) {
        emit_new_popup(&self.new_popup, popup);
    }
}

impl PopupSurface for TestSurface {
    fn events(&self) -> &EventSource<dyn PopupSurfaceListener> {
        &self.events
    }

    fn new_popup_events(&self) -> &EventSource<dyn NewPopupListener> {
        &self.new_popup
    }

    fn geometry(&self) -> Rect {
        self.geometry.get()
    }

    fn size(&self) -> Size {
        self.size.get()
    }

    fn offset(&self) -> (i32, i32) {
        self.offset.get()
    }

    fn extents(&self) -> Rect {
        self.size.get().at_point(0, 0)
    }

    fn input_region(&self) -> Rc<Region> {
        self.input.borrow().clone()
    }

    fn is_initial_commit(&self) -> bool {
        self.initial_commit.get()
    }

    fn schedule_configure(&self) {
        self.configures.set(self.configures.get() + 1);
    }

    fn is_mapped(&self) -> bool {
        self.mapped.get()
    }

    fn set_preferred_scale(&self, scale: Scale) {
        self.preferred_scale.set(Some(scale));
    }

    fn enter_output(&self, output: OutputId) {
        self.entered.borrow_mut().push(output);
    }

    fn create_subsurface_tree(&self) -> Box<dyn SubsurfaceTree> {
        let stats = &self.subsurfaces;
        stats.created.set(stats.created.get() + 1);
        stats.live.set(stats.live.get() + 1);
        Box::new(TestSubsurfaces {
            stats: stats.clone(),
        })
    }

    fn assign_popup(&self, popup: PopupId) {
        self.assigned.set(Some(popup));
    }

    fn unassign_popup(&self) {
        self.assigned.set(None);
    }
}

pub struct TestPopup {
    pub events: EventSource<dyn PopupResourceListener>,
    pub surface: RefCell<Option<Rc<TestSurface>>>,
    /// The position relative to the parent, as produced by the positioner.
    pub geometry: Cell<Rect>,
    pub positioned: RefCell<Vec<(Rect, (i32, i32))>>,
}

impl TestPopup {
    /// A popup at `(x, y)` relative to its parent with a surface of the given
    /// size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rc<Self> {
        Rc::new(Self {
            events: Default::default(),
            surface: RefCell::new(Some(TestSurface::new(width, height))),
            geometry: Cell::new(Rect::new_sized(x, y, width, height).unwrap()),
            positioned: Default::default(),
        })
    }

    pub fn surface(&self) -> Rc<TestSurface> {
        self.surface.borrow().clone().unwrap()
    }

    pub fn reposition(&self, x: i32, y: i32) {
        let g = self.geometry.get();
        self.geometry
            .set(Rect::new_sized(x, y, g.width(), g.height()).unwrap());
        for l in self.events.iter() {
            l.repositioned();
        }
    }

    pub fn dismiss(&self) {
        for l in self.events.iter() {
            l.dismissed();
        }
    }
}

impl PopupResource for TestPopup {
    fn events(&self) -> &EventSource<dyn PopupResourceListener> {
        &self.events
    }

    fn surface(&self) -> Option<Rc<dyn PopupSurface>> {
        self.surface
            .borrow()
            .clone()
            .map(|s| s as Rc<dyn PopupSurface>)
    }

    fn geometry(&self) -> Rect {
        self.geometry.get()
    }

    fn apply_positioning(&self, bounds: Rect, origin: (i32, i32)) {
        self.positioned.borrow_mut().push((bounds, origin));
    }
}
