use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};


struct Link<T: ?Sized> {
    target: Weak<T>,
    attached: Cell<bool>,
}

/// A typed subscription point.
///
/// The source never keeps its listeners alive. A listener whose target has
/// been dropped is skipped and pruned on the next dispatch.
pub struct EventSource<T: ?Sized> {
    listeners: RefCell<Vec<Rc<Link<T>>>>,
}

/// A scoped subscription to an [`EventSource`].
///
/// Dropping the listener detaches it.
pub struct EventListener<T: ?Sized> {
    target: Weak<T>,
    link: RefCell<Option<Rc<Link<T>>>>,
}

impl<T: ?Sized> Default for EventSource<T> {
    fn default() -> Self {
        Self {
            listeners: Default::default(),
        }
    }
}

impl<T: ?Sized> EventSource<T> {
    /// Returns the live listeners in attachment order.
    ///
    /// The returned list is a snapshot. Handlers invoked while iterating it
    /// may attach or detach listeners of this source.
    pub fn iter(&self) -> std::vec::IntoIter<Rc<T>> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|l| l.attached.get() && l.target.strong_count() > 0);
        listeners
            .iter()
            .filter_map(|l| l.target.upgrade())
            .collect::<Vec<_>>()
            .into_iter()
    }

    pub fn has_listeners(&self) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| l.attached.get() && l.target.strong_count() > 0)
    }
}

impl<T: ?Sized> EventListener<T> {
    pub fn new(t: Weak<T>) -> Self {
        Self {
            target: t,
            link: Default::default(),
        }
    }

    /// Attaches the listener to `source`, detaching it from any previous
    /// source first.
    pub fn attach(&self, source: &EventSource<T>) {
        let link = Rc::new(Link {
            target: self.target.clone(),
            attached: Cell::new(true),
        });
        source.listeners.borrow_mut().push(link.clone());
        if let Some(old) = self.link.replace(Some(link)) {
            old.attached.set(false);
        }
    }

    pub fn detach(&self) {
        if let Some(link) = self.link.take() {
            link.attached.set(false);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.link
            .borrow()
            .as_ref()
            .map(|l| l.attached.get())
            .unwrap_or(false)
    }

    pub fn get(&self) -> Option<Rc<T>> {
        self.target.upgrade()
    }
}

impl<T: ?Sized> Drop for EventListener<T> {
    fn drop(&mut self) {
        self.detach();
    }
}
