use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use tracing::trace;

use crate::{Disposable, Event, SharedError};

struct Inner<T> {
    sink: RefCell<Box<dyn FnMut(Event<T>)>>,
    pending: RefCell<VecDeque<Event<T>>>,
    is_stopped: Cell<bool>,
    subscription: Disposable,
}

/// The sink side of one subscription.
///
/// An `Observer` forwards events until it sees `Error` or `Completed`, or
/// until its subscription is disposed. Anything pushed after that is dropped.
/// Forwarding a terminal event disposes the subscription.
///
/// Events pushed from inside the sink are queued and delivered, in order,
/// once the current event has been handled.
pub struct Observer<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Observer<T> {
    pub(crate) fn new<F: FnMut(Event<T>) + 'static>(subscription: Disposable, sink: F) -> Self {
        Self {
            inner: Rc::new(Inner {
                sink: RefCell::new(Box::new(sink)),
                pending: RefCell::new(VecDeque::new()),
                is_stopped: Cell::new(false),
                subscription,
            }),
        }
    }

    /// Builds an upstream observer that belongs to the same subscription.
    pub(crate) fn chain<U: 'static, F: FnMut(Event<U>) + 'static>(&self, sink: F) -> Observer<U> {
        Observer::new(self.inner.subscription.clone(), sink)
    }

    pub fn on(&self, event: Event<T>) {
        let Ok(mut sink) = self.inner.sink.try_borrow_mut() else {
            trace!("queueing reentrant event");
            self.inner.pending.borrow_mut().push_back(event);
            return;
        };
        let mut next = Some(event);

        while let Some(event) = next {
            self.deliver(&mut **sink, event);
            next = self.inner.pending.borrow_mut().pop_front();
        }
    }

    fn deliver(&self, sink: &mut dyn FnMut(Event<T>), event: Event<T>) {
        if self.is_stopped() {
            trace!(terminal = event.is_terminal(), "dropping event on stopped observer");
            return;
        }

        let is_terminal = event.is_terminal();

        if is_terminal {
            self.inner.is_stopped.set(true);
        }

        sink(event);

        if is_terminal {
            self.inner.subscription.dispose();
        }
    }

    pub fn on_next(&self, value: T) {
        self.on(Event::Next(value));
    }

    pub fn on_error(&self, error: SharedError) {
        self.on(Event::Error(error));
    }

    pub fn on_completed(&self) {
        self.on(Event::Completed);
    }

    /// `true` once a terminal event went through or the subscription was
    /// disposed.
    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped.get() || self.is_disposed()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.subscription.is_disposed()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::RxError;

    fn recording_observer() -> (Observer<i32>, Disposable, Rc<RefCell<Vec<Event<i32>>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let subscription = Disposable::empty();
        let observer = Observer::new(subscription.clone(), move |event| {
            sink.borrow_mut().push(event)
        });

        (observer, subscription, events)
    }

    #[test]
    fn smoke() {
        let (observer, subscription, events) = recording_observer();

        observer.on_next(1);
        observer.on_completed();
        observer.on_next(2);
        observer.on_completed();

        assert_eq!(*events.borrow(), [Event::Next(1), Event::Completed]);
        assert!(observer.is_stopped());
        assert!(subscription.is_disposed());
    }

    #[test]
    fn error_is_terminal() {
        let (observer, _, events) = recording_observer();

        observer.on_error(RxError::NoElements.into_shared());
        observer.on_next(1);
        observer.on_completed();

        assert_eq!(
            *events.borrow(),
            [Event::Error(RxError::NoElements.into_shared())]
        );
    }

    #[test]
    fn drops_events_after_dispose() {
        let (observer, subscription, events) = recording_observer();

        observer.on_next(1);
        subscription.dispose();
        observer.on_next(2);

        assert!(observer.is_disposed());
        assert_eq!(*events.borrow(), [Event::Next(1)]);
    }

    #[test]
    fn chained_observers_share_the_subscription() {
        let (observer, subscription, events) = recording_observer();
        let downstream = observer.clone();
        let upstream = observer.chain(move |event: Event<&str>| {
            downstream.on(event.map(|it| it.len() as i32))
        });

        upstream.on_next("abc");
        subscription.dispose();
        upstream.on_next("de");

        assert!(upstream.is_stopped());
        assert_eq!(*events.borrow(), [Event::Next(3)]);
    }

    #[test]
    fn reentrant_events_are_queued_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let slot = Rc::new(RefCell::new(None::<Observer<i32>>));
        let feedback = Rc::clone(&slot);
        let observer = Observer::new(Disposable::empty(), move |event: Event<i32>| {
            sink.borrow_mut().push(event.clone());

            if let Some(observer) = feedback.borrow().as_ref() {
                match event {
                    Event::Next(value) if value < 3 => {
                        observer.on_next(value + 1);
                        observer.on_next(value + 10);
                    }
                    Event::Next(_) => observer.on_completed(),
                    _ => observer.on_next(99),
                }
            }
        });

        *slot.borrow_mut() = Some(observer.clone());
        observer.on_next(1);

        assert_eq!(
            *events.borrow(),
            [
                Event::Next(1),
                Event::Next(2),
                Event::Next(11),
                Event::Next(3),
                Event::Next(12),
                Event::Completed
            ]
        );
        assert!(observer.is_stopped());
    }
}
