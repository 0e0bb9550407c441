use std::rc::Rc;

use crate::{Disposable, Observable, Observer};

impl<T: 'static> Observable<T> {
    /// Builds an observable from a producer.
    ///
    /// `effect` runs once per subscription with that subscription's
    /// [`Observer`] and returns the cleanup for whatever it started. Events it
    /// pushes after `on_completed` or `on_error` are dropped by the observer.
    pub fn create<F>(effect: F) -> Self
    where
        F: Fn(Observer<T>) -> Disposable + 'static,
    {
        Self {
            subscribe_fn: Rc::new(effect),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use crate::{prelude::*, testing::Recorder};

    #[test]
    fn smoke() {
        let recorder = Recorder::new();
        let observable = Observable::<String>::create(|observer| {
            observer.on_next("1".to_owned());
            observer.on_next("2".to_owned());
            observer.on_completed();
            observer.on_next("3".to_owned());

            Disposable::empty()
        });
        let bag = DisposeBag::new();

        observable.subscribe(recorder.subscriber()).disposed_by(&bag);

        assert_eq!(
            recorder.entries(),
            ["next(\"1\")", "next(\"2\")", "completed", "disposed"]
        );
    }

    #[test]
    fn error_stops_the_sequence() {
        let recorder = Recorder::new();
        let observable = Observable::<i32>::create(|observer| {
            observer.on_next(1);
            observer.on_error(RxError::NoElements.into_shared());
            observer.on_next(2);
            observer.on_completed();

            Disposable::empty()
        });

        observable.subscribe(recorder.subscriber()).dispose();

        assert_eq!(
            recorder.entries(),
            [
                "next(1)",
                "error(sequence completed without an element)",
                "disposed"
            ]
        );
    }

    #[test]
    fn producer_cleanup_runs_once_after_completion() {
        let cleanups = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cleanups);
        let observable = Observable::<i32>::create(move |observer| {
            let counter = Rc::clone(&counter);

            observer.on_completed();

            Disposable::new(move || counter.set(counter.get() + 1))
        });

        let subscription = observable.subscribe_next(|_| {});

        assert!(subscription.is_disposed());
        subscription.dispose();
        assert_eq!(cleanups.get(), 1);
    }

    #[test]
    fn producer_observes_disposal() {
        let slot: Rc<RefCell<Option<Observer<i32>>>> = Rc::default();
        let producer_slot = Rc::clone(&slot);
        let observable = Observable::create(move |observer| {
            *producer_slot.borrow_mut() = Some(observer);

            Disposable::empty()
        });
        let recorder = Recorder::new();
        let subscription = observable.subscribe(recorder.subscriber());
        let observer = slot.borrow_mut().take().unwrap();

        observer.on_next(1);
        subscription.dispose();

        assert!(observer.is_disposed());
        observer.on_next(2);
        observer.on_completed();

        assert_eq!(recorder.entries(), ["next(1)", "disposed"]);
    }

    #[test]
    fn subscriptions_are_independent() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let observable = Observable::create(move |observer| {
            counter.set(counter.get() + 1);
            observer.on_next(counter.get());
            observer.on_completed();

            Disposable::empty()
        });
        let first = Recorder::new();
        let second = Recorder::new();

        observable.subscribe(first.subscriber()).dispose();
        observable.clone().subscribe(second.subscriber()).dispose();

        assert_eq!(runs.get(), 2);
        assert_eq!(first.entries(), ["next(1)", "completed", "disposed"]);
        assert_eq!(second.entries(), ["next(2)", "completed", "disposed"]);
    }

    #[test]
    fn subscriber_can_push_back_into_its_producer() {
        let slot: Rc<RefCell<Option<Observer<i32>>>> = Rc::default();
        let producer_slot = Rc::clone(&slot);
        let observable = Observable::create(move |observer| {
            *producer_slot.borrow_mut() = Some(observer.clone());
            observer.on_next(1);
            observer.on_completed();

            Disposable::empty()
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        observable
            .subscribe_next(move |it| {
                sink.borrow_mut().push(it);

                if it == 1 {
                    if let Some(observer) = slot.borrow().as_ref() {
                        observer.on_next(2);
                    }
                }
            })
            .dispose();

        assert_eq!(*seen.borrow(), [1, 2]);
    }
}
