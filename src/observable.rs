pub mod create;
pub mod defer;
pub mod event;
pub mod from;
pub mod observer;
pub mod subscriber;

use std::{fmt, rc::Rc};

use crate::Disposable;

use observer::Observer;

/// A lazy, re-playable recipe for a push-based event sequence.
///
/// Nothing happens until [`subscribe`](Observable::subscribe) is called, and
/// every subscription runs the recipe again from scratch. Clones share the
/// recipe only.
pub struct Observable<T> {
    subscribe_fn: Rc<dyn Fn(Observer<T>) -> Disposable>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe_fn: Rc::clone(&self.subscribe_fn),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

impl<T: 'static> Observable<T> {
    pub(crate) fn subscribe_observer(&self, observer: Observer<T>) -> Disposable {
        (self.subscribe_fn)(observer)
    }
}
