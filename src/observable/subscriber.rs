use tracing::debug;

use crate::{CompositeDisposable, Disposable, Event, Observable, Observer, SharedError};

/// The callback set handed to [`Observable::subscribe`].
///
/// Every slot is optional. Without an `on_error` callback an error event is
/// only logged.
pub struct Subscriber<T> {
    on_next: Option<Box<dyn FnMut(T)>>,
    on_error: Option<Box<dyn FnOnce(SharedError)>>,
    on_completed: Option<Box<dyn FnOnce()>>,
    on_disposed: Option<Box<dyn FnOnce()>>,
}

impl<T> Default for Subscriber<T> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
            on_disposed: None,
        }
    }
}

impl<T: 'static> Subscriber<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_next<F: FnMut(T) + 'static>(mut self, f: F) -> Self {
        self.on_next = Some(Box::new(f));
        self
    }

    pub fn on_error<F: FnOnce(SharedError) + 'static>(mut self, f: F) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_completed<F: FnOnce() + 'static>(mut self, f: F) -> Self {
        self.on_completed = Some(Box::new(f));
        self
    }

    /// Runs once the subscription is disposed, whether it terminated or was
    /// cancelled.
    pub fn on_disposed<F: FnOnce() + 'static>(mut self, f: F) -> Self {
        self.on_disposed = Some(Box::new(f));
        self
    }

    fn into_parts(self) -> (impl FnMut(Event<T>) + 'static, Option<Box<dyn FnOnce()>>) {
        let Self {
            mut on_next,
            mut on_error,
            mut on_completed,
            on_disposed,
        } = self;

        let sink = move |event: Event<T>| match event {
            Event::Next(value) => {
                if let Some(on_next) = on_next.as_mut() {
                    on_next(value);
                }
            }
            Event::Error(error) => match on_error.take() {
                Some(on_error) => on_error(error),
                None => debug!(%error, "unhandled error event"),
            },
            Event::Completed => {
                if let Some(on_completed) = on_completed.take() {
                    on_completed();
                }
            }
        };

        (sink, on_disposed)
    }
}

impl<T: 'static> Observable<T> {
    /// Subscribes with a set of optional callbacks.
    ///
    /// The returned [`Disposable`] ends the subscription. It is disposed
    /// automatically after `on_completed` or `on_error`.
    pub fn subscribe(&self, subscriber: Subscriber<T>) -> Disposable {
        let (sink, on_disposed) = subscriber.into_parts();

        self.subscribe_sink(sink, on_disposed)
    }

    /// Subscribes with one callback receiving every [`Event`].
    pub fn subscribe_event<F: FnMut(Event<T>) + 'static>(&self, on_event: F) -> Disposable {
        self.subscribe_sink(on_event, None)
    }

    pub fn subscribe_next<F: FnMut(T) + 'static>(&self, on_next: F) -> Disposable {
        self.subscribe(Subscriber::new().on_next(on_next))
    }

    fn subscribe_sink<F: FnMut(Event<T>) + 'static>(
        &self,
        sink: F,
        on_disposed: Option<Box<dyn FnOnce()>>,
    ) -> Disposable {
        // The upstream handle is only known once the producer returns, which
        // may be after it already terminated; the composite disposes it on
        // arrival in that case.
        let upstream = CompositeDisposable::new();
        let subscription = {
            let upstream = upstream.clone();

            Disposable::new(move || {
                if let Some(on_disposed) = on_disposed {
                    on_disposed();
                }

                upstream.dispose();
            })
        };

        upstream.add(self.subscribe_observer(Observer::new(subscription.clone(), sink)));

        subscription
    }
}
