use std::{cell::RefCell, fmt, rc::Rc};

use crate::Subscriber;

/// Collects a textual trace of callbacks, shared between clones.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// A subscriber that records `next(..)`, `error(..)`, `completed` and
    /// `disposed`.
    pub(crate) fn subscriber<T: fmt::Debug + 'static>(&self) -> Subscriber<T> {
        let (on_next, on_error, on_completed, on_disposed) =
            (self.clone(), self.clone(), self.clone(), self.clone());

        Subscriber::new()
            .on_next(move |it| on_next.push(format!("next({it:?})")))
            .on_error(move |error| on_error.push(format!("error({error})")))
            .on_completed(move || on_completed.push("completed"))
            .on_disposed(move || on_disposed.push("disposed"))
    }
}
