use std::cell::RefCell;

use crate::{Disposable, Observable, RxError, SharedError};

impl<T: 'static> Observable<T> {
    /// Builds a fresh observable per subscription by calling `factory`.
    ///
    /// The deferred observable owns `factory` and whatever state it
    /// captured, so state mutated by one subscription is seen by the next.
    /// Subscribing to the deferred observable from inside `factory` yields
    /// an [`RxError::ReentrantFactory`] error for that inner subscription.
    pub fn deferred<F>(factory: F) -> Self
    where
        F: FnMut() -> Observable<T> + 'static,
    {
        let factory = RefCell::new(factory);

        Self::create(move |observer| {
            let source = match factory.try_borrow_mut() {
                Ok(mut factory) => (*factory)(),
                Err(_) => Observable::error(RxError::ReentrantFactory.into_shared()),
            };

            source.subscribe_observer(observer)
        })
    }

    /// Like [`deferred`](Self::deferred), with a factory that may fail. A
    /// failure is delivered as the error event of that subscription.
    pub fn try_deferred<F>(factory: F) -> Self
    where
        F: FnMut() -> Result<Observable<T>, SharedError> + 'static,
    {
        let factory = RefCell::new(factory);

        Self::create(move |observer| {
            let source = match factory.try_borrow_mut() {
                Ok(mut factory) => (*factory)(),
                Err(_) => Err(RxError::ReentrantFactory.into_shared()),
            };

            match source {
                Ok(source) => source.subscribe_observer(observer),
                Err(error) => {
                    observer.on_error(error);

                    Disposable::empty()
                }
            }
        })
    }
}
