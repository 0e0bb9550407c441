use std::fmt;

use crate::{
    observable_ext::{map::map, AsObservable},
    Disposable, Event, Observable, Observer, RxError, SharedError,
};

/// The outcome delivered to a [`Single`] subscriber.
pub type SingleResult<T> = Result<T, SharedError>;

/// An observable that ends with exactly one result: a value or an error.
pub struct Single<T> {
    source: Observable<T>,
}

impl<T> Clone for Single<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T> fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Single").finish_non_exhaustive()
    }
}

/// Handed to the effect of [`Single::create`]. The first call to
/// [`success`](Self::success) or [`error`](Self::error) wins.
pub struct SingleEmitter<T> {
    observer: Observer<T>,
}

impl<T: 'static> SingleEmitter<T> {
    pub fn success(&self, value: T) {
        if self.observer.is_stopped() {
            return;
        }

        self.observer.on_next(value);
        self.observer.on_completed();
    }

    pub fn error(&self, error: SharedError) {
        self.observer.on_error(error);
    }

    pub fn emit(&self, result: SingleResult<T>) {
        match result {
            Ok(value) => self.success(value),
            Err(error) => self.error(error),
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.observer.is_disposed()
    }
}

impl<T: 'static> Single<T> {
    pub fn create<F>(effect: F) -> Self
    where
        F: Fn(SingleEmitter<T>) -> Disposable + 'static,
    {
        Self::from_observable(Observable::create(move |observer| {
            effect(SingleEmitter { observer })
        }))
    }

    pub fn just(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_observable(Observable::just(value))
    }

    pub fn error(error: SharedError) -> Self {
        Self::from_observable(Observable::error(error))
    }

    /// Wraps a source that already emits at most one element before
    /// terminating.
    pub(crate) fn from_observable(source: Observable<T>) -> Self {
        Self { source }
    }

    /// Subscribes with a callback that receives the result exactly once,
    /// unless the subscription is disposed first.
    pub fn subscribe<F: FnOnce(SingleResult<T>) + 'static>(&self, on_result: F) -> Disposable {
        let mut on_result = Some(on_result);

        self.source.subscribe_event(move |event| {
            let Some(on_result) = on_result.take() else {
                return;
            };

            match event {
                Event::Next(value) => on_result(Ok(value)),
                Event::Error(error) => on_result(Err(error)),
                Event::Completed => on_result(Err(RxError::NoElements.into_shared())),
            }
        })
    }

    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(&self, transform: F) -> Single<U> {
        Single::from_observable(map(self.source.clone(), transform))
    }
}

impl<T: 'static> AsObservable for Single<T> {
    type Item = T;

    fn as_observable(&self) -> Observable<T> {
        self.source.clone()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use crate::{prelude::*, testing::Recorder};

    fn collect<T: 'static>(single: &Single<T>) -> Rc<RefCell<Vec<SingleResult<T>>>> {
        let results = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&results);

        single
            .subscribe(move |result| sink.borrow_mut().push(result))
            .dispose();

        results
    }

    #[test]
    fn smoke() {
        let single = Single::create(|single| {
            single.success("contents");
            single.error(RxError::NoElements.into_shared());

            Disposable::empty()
        });
        let results = collect(&single);
        let results = results.borrow();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().ok(), Some(&"contents"));
    }

    #[test]
    fn first_error_wins() {
        let single = Single::create(|single| {
            single.emit(Err(RxError::NoElements.into_shared()));
            single.success(1);

            Disposable::empty()
        });
        let results = collect(&single);
        let results = results.borrow();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].as_ref().err().map(|error| error.to_string()),
            Some("sequence completed without an element".to_owned())
        );
    }

    #[test]
    fn every_subscription_reruns_the_effect() {
        let runs = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&runs);
        let single = Single::create(move |single| {
            *counter.borrow_mut() += 1;
            single.success(*counter.borrow());

            Disposable::empty()
        });

        let first = collect(&single);
        let second = collect(&single);

        assert_eq!(first.borrow()[0].as_ref().ok(), Some(&1));
        assert_eq!(second.borrow()[0].as_ref().ok(), Some(&2));
    }

    #[test]
    fn map_keeps_a_single_result() {
        let results = collect(&Single::just(21).map(|it| it * 2));

        assert_eq!(results.borrow()[0].as_ref().ok(), Some(&42));
    }

    #[test]
    fn as_observable() {
        let recorder = Recorder::new();

        Single::just("A")
            .as_observable()
            .subscribe(recorder.subscriber())
            .dispose();
        Single::<i32>::error(RxError::NoElements.into_shared())
            .as_observable()
            .subscribe(recorder.subscriber())
            .dispose();

        assert_eq!(
            recorder.entries(),
            [
                "next(\"A\")",
                "completed",
                "disposed",
                "error(sequence completed without an element)",
                "disposed"
            ]
        );
    }

    #[test]
    fn disposed_before_result() {
        let emitter: Rc<RefCell<Option<SingleEmitter<i32>>>> = Rc::default();
        let slot = Rc::clone(&emitter);
        let single = Single::create(move |single| {
            *slot.borrow_mut() = Some(single);

            Disposable::empty()
        });
        let results = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&results);
        let subscription = single.subscribe(move |result| sink.borrow_mut().push(result));
        let emitter = emitter.borrow_mut().take().unwrap();

        subscription.dispose();
        emitter.success(1);

        assert!(emitter.is_disposed());
        assert!(results.borrow().is_empty());
    }
}
