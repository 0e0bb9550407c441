use crate::{Event, Observable, Observer, RxError, Single};

/// Exactly one element followed by completion becomes a success. No element
/// fails with [`RxError::NoElements`], a second element with
/// [`RxError::MoreThanOneElement`].
pub(crate) fn as_single<T: 'static>(source: Observable<T>) -> Single<T> {
    Single::from_observable(Observable::create(move |observer: Observer<T>| {
        let downstream = observer.clone();
        let mut element = None;

        source.subscribe_observer(observer.chain(move |event: Event<T>| match event {
            Event::Next(value) => {
                if element.is_some() {
                    downstream.on_error(RxError::MoreThanOneElement.into_shared());
                } else {
                    element = Some(value);
                }
            }
            Event::Error(error) => downstream.on_error(error),
            Event::Completed => match element.take() {
                Some(value) => {
                    downstream.on_next(value);
                    downstream.on_completed();
                }
                None => downstream.on_error(RxError::NoElements.into_shared()),
            },
        }))
    }))
}
