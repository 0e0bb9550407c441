use std::rc::Rc;

use crate::{Event, Observable, Observer, SharedError};

pub(crate) fn map<T, U, F>(source: Observable<T>, transform: F) -> Observable<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let transform = Rc::new(transform);

    Observable::create(move |observer: Observer<U>| {
        let transform = Rc::clone(&transform);
        let downstream = observer.clone();

        source.subscribe_observer(
            observer.chain(move |event: Event<T>| downstream.on(event.map(|it| (*transform)(it)))),
        )
    })
}

pub(crate) fn try_map<T, U, F>(source: Observable<T>, transform: F) -> Observable<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Result<U, SharedError> + 'static,
{
    let transform = Rc::new(transform);

    Observable::create(move |observer: Observer<U>| {
        let transform = Rc::clone(&transform);
        let downstream = observer.clone();

        source.subscribe_observer(observer.chain(move |event: Event<T>| match event {
            Event::Next(it) => match (*transform)(it) {
                Ok(mapped) => downstream.on_next(mapped),
                Err(error) => downstream.on_error(error),
            },
            Event::Error(error) => downstream.on_error(error),
            Event::Completed => downstream.on_completed(),
        }))
    })
}
