use std::{
    cell::{Cell, RefCell},
    mem,
};

use tracing::trace;

use super::Disposable;

/// Owns a batch of [`Disposable`]s and tears them down together.
///
/// Teardown runs on [`dispose`](DisposeBag::dispose) or on drop, whichever
/// comes first. Members are disposed in insertion order. A torn-down bag
/// disposes anything inserted afterwards straight away.
#[derive(Default)]
pub struct DisposeBag {
    disposables: RefCell<Vec<Disposable>>,
    is_disposed: Cell<bool>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, disposable: Disposable) {
        if self.is_disposed() {
            trace!("dispose bag already torn down, disposing insertion");
            disposable.dispose();
        } else {
            self.disposables.borrow_mut().push(disposable);
        }
    }

    pub fn len(&self) -> usize {
        self.disposables.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_disposed(&self) -> bool {
        self.is_disposed.get()
    }

    pub fn dispose(&self) {
        if self.is_disposed.replace(true) {
            return;
        }

        let disposables = mem::take(&mut *self.disposables.borrow_mut());

        trace!(count = disposables.len(), "tearing down dispose bag");

        for disposable in disposables {
            disposable.dispose();
        }
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}
