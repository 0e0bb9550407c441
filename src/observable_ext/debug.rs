use std::{fmt::Debug, rc::Rc};

use tracing::debug as log;

use super::tap::{tap, Tap};
use crate::{Event, Observable, SharedError};

/// Target of every record written by the [`debug`](crate::RxExt::debug)
/// operator.
pub const DEBUG_TARGET: &str = "push_rx::debug";

pub(crate) fn debug<T: Debug + 'static>(source: Observable<T>, identifier: String) -> Observable<T> {
    let identifier: Rc<str> = identifier.into();
    let (subscribed, next, error, completed, disposed) = (
        Rc::clone(&identifier),
        Rc::clone(&identifier),
        Rc::clone(&identifier),
        Rc::clone(&identifier),
        identifier,
    );

    tap(
        source,
        Tap::new()
            .on_subscribe(move || log!(target: DEBUG_TARGET, "{subscribed} -> subscribed"))
            .on_next(move |it: &T| {
                log!(target: DEBUG_TARGET, "{next} -> Event next({it:?})");
            })
            .on_error(move |it: &SharedError| {
                log!(target: DEBUG_TARGET, "{error} -> Event {}", Event::<T>::Error(Rc::clone(it)));
            })
            .on_completed(move || {
                log!(target: DEBUG_TARGET, "{completed} -> Event {}", Event::<T>::Completed);
            })
            .on_dispose(move || log!(target: DEBUG_TARGET, "{disposed} -> isDisposed")),
    )
}
