use {
    crate::rect::Rect,
    smallvec::SmallVec,
    std::{ops::Deref, rc::Rc},
};

/// A set of rectangles. Overlapping rectangles are allowed; the region is
/// their union.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Region {
    rects: SmallVec<[Rect; 1]>,
    extents: Rect,
}

impl Region {
    pub fn new(rect: Rect) -> Rc<Self> {
        let mut rects = SmallVec::new();
        if !rect.is_empty() {
            rects.push(rect);
        }
        Rc::new(Self {
            rects,
            extents: rect,
        })
    }

    pub fn empty() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// The region clients get when they never set an input region.
    pub fn infinite() -> Rc<Self> {
        Self::new(Rect {
            x1: i32::MIN,
            y1: i32::MIN,
            x2: i32::MAX,
            y2: i32::MAX,
        })
    }

    pub fn from_rects(rects: &[Rect]) -> Rc<Self> {
        let rects: SmallVec<[Rect; 1]> = rects.iter().copied().filter(|r| !r.is_empty()).collect();
        let extents = rects
            .iter()
            .fold(Rect::default(), |acc, r| acc.union(*r));
        Rc::new(Self { rects, extents })
    }

    pub fn intersect_rect(&self, rect: Rect) -> Rc<Self> {
        if !self.extents.intersects(&rect) {
            return Self::empty();
        }
        let rects: SmallVec<[Rect; 4]> = self
            .rects
            .iter()
            .map(|r| r.intersect(rect))
            .collect();
        Self::from_rects(&rects)
    }

    pub fn move_(&self, dx: i32, dy: i32) -> Rc<Self> {
        Rc::new(Self {
            rects: self.rects.iter().map(|r| r.move_(dx, dy)).collect(),
            extents: self.extents.move_(dx, dy),
        })
    }

    pub fn extents(&self) -> Rect {
        self.extents
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if !self.extents.contains(x, y) {
            return false;
        }
        self.rects.iter().any(|r| r.contains(x, y))
    }
}

impl Deref for Region {
    type Target = [Rect];

    fn deref(&self) -> &Self::Target {
        &self.rects
    }
}
