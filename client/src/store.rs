//! Observable container for the selected file.
//!
//! `set` replaces, `get` returns the current value, and every change is
//! pushed to subscribers so a render layer can follow it. The store is
//! single-threaded: clones share state through `Rc`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::file::FileHandle;

type Callback<F> = Rc<dyn Fn(Option<&F>)>;

struct Inner<F> {
    current: Option<F>,
    next_id: u64,
    subscribers: Vec<(u64, Callback<F>)>,
}

/// Holds the currently selected file (or none).
pub struct SelectionStore<F: FileHandle> {
    inner: Rc<RefCell<Inner<F>>>,
}

impl<F: FileHandle> SelectionStore<F> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: None,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Current selection.
    pub fn get(&self) -> Option<F> {
        self.inner.borrow().current.clone()
    }

    pub fn is_selected(&self) -> bool {
        self.inner.borrow().current.is_some()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.inner.borrow().current.as_ref().map(|f| f.name().to_string())
    }

    /// Replace the selection and notify subscribers in subscription order.
    pub fn set(&self, value: Option<F>) {
        // Callbacks run without the borrow held so they may read the store.
        let callbacks: Vec<Callback<F>> = {
            let mut inner = self.inner.borrow_mut();
            inner.current = value.clone();
            inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };

        for callback in callbacks {
            callback(value.as_ref());
        }
    }

    /// Register a change callback. It stays active until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(Option<&F>) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));

        let weak: Weak<RefCell<Inner<F>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<F: FileHandle> Clone for SelectionStore<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: FileHandle> Default for SelectionStore<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`SelectionStore::subscribe`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Keep the callback registered for the lifetime of the store.
    pub fn forget(mut self) {
        self.cancel = None;
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}
