//! Shared mutable holders for view-model state.

use std::{cell::RefCell, rc::Rc};

use leptos::{RwSignal, SignalUpdate, SignalWithUntracked};

/// Interior-mutable holder that async drivers update between awaits.
///
/// Implementations must not hold a borrow across calls; every access is a short closure.
pub trait StateCell<S> {
    /// Mutates the held state.
    fn update_state(&self, f: impl FnOnce(&mut S));

    /// Reads the held state without subscribing to changes.
    fn read_state<R>(&self, f: impl FnOnce(&S) -> R) -> R;
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn update_state(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut());
    }

    fn read_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }
}

impl<S: 'static> StateCell<S> for RwSignal<S> {
    fn update_state(&self, f: impl FnOnce(&mut S)) {
        self.update(f);
    }

    fn read_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.with_untracked(f)
    }
}
