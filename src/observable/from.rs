use std::rc::Rc;

use crate::{Disposable, Observable, Observer, RxError, SharedError};

fn emit_all<T: Clone + 'static>(observer: &Observer<T>, values: &[T]) {
    for value in values {
        if observer.is_stopped() {
            return;
        }

        observer.on_next(value.clone());
    }

    observer.on_completed();
}

impl<T: 'static> Observable<T> {
    /// Emits `value`, then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone,
    {
        Self::create(move |observer| {
            observer.on_next(value.clone());
            observer.on_completed();

            Disposable::empty()
        })
    }

    /// Emits every item of `values` in order, then completes.
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self
    where
        T: Clone,
    {
        let values: Rc<[T]> = values.into_iter().collect();

        Self::create(move |observer| {
            emit_all(&observer, &values);

            Disposable::empty()
        })
    }

    pub fn empty() -> Self {
        Self::create(|observer| {
            observer.on_completed();

            Disposable::empty()
        })
    }

    /// Never emits anything. Only an explicit dispose ends the subscription.
    pub fn never() -> Self {
        Self::create(|_| Disposable::empty())
    }

    pub fn error(error: SharedError) -> Self {
        Self::create(move |observer| {
            observer.on_error(Rc::clone(&error));

            Disposable::empty()
        })
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Observable<T> {
    fn from(values: Vec<T>) -> Self {
        Self::of(values)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Observable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::of(values)
    }
}

impl Observable<i64> {
    /// Emits `count` consecutive integers starting at `start`, then completes.
    ///
    /// A negative `count`, or a range running past `i64::MAX`, is delivered
    /// as an error event before any element.
    pub fn range(start: i64, count: i64) -> Self {
        Self::create(move |observer| {
            if count < 0 {
                observer.on_error(RxError::NegativeCount(count).into_shared());

                return Disposable::empty();
            }

            if count > 0 && start.checked_add(count - 1).is_none() {
                observer.on_error(RxError::RangeOverflow { start, count }.into_shared());

                return Disposable::empty();
            }

            for offset in 0..count {
                if observer.is_stopped() {
                    return Disposable::empty();
                }

                observer.on_next(start + offset);
            }

            observer.on_completed();

            Disposable::empty()
        })
    }
}
