use {
    crate::tree::Popup,
    smallvec::{smallvec, SmallVec},
    std::rc::Rc,
};

pub trait PopupVisitor {
    fn visit_popup(&mut self, popup: &Rc<Popup>);
}

impl<F: FnMut(&Rc<Popup>)> PopupVisitor for F {
    fn visit_popup(&mut self, popup: &Rc<Popup>) {
        self(popup)
    }
}

type Frontier = SmallVec<[Rc<Popup>; 8]>;

impl Popup {
    /// Visits this popup and all of its descendants level by level.
    ///
    /// Within a level, nodes are visited in the order their parents were
    /// visited and, for siblings, in creation order. The children of a level
    /// are collected after the visitor has seen the whole level, so the
    /// visitor may remove nodes from the tree.
    pub fn breadth_first(self: &Rc<Self>, visitor: &mut dyn PopupVisitor) {
        let mut frontier: Frontier = smallvec![self.clone()];
        while !frontier.is_empty() {
            for popup in &frontier {
                visitor.visit_popup(popup);
            }
            let mut next = Frontier::new();
            for popup in &frontier {
                next.extend(popup.children.borrow().iter().cloned());
            }
            frontier = next;
        }
    }

    /// All nodes of the subtree in breadth-first order.
    pub fn breadth_first_list(self: &Rc<Self>) -> Vec<Rc<Popup>> {
        let mut popups = vec![];
        self.breadth_first(&mut |p: &Rc<Popup>| popups.push(p.clone()));
        popups
    }
}
