use std::fmt::Debug;

use into_stream::EventStream;
use tap::Tap;

use crate::{Observable, SharedError, Single};

pub mod as_single;
pub mod debug;
pub mod into_stream;
pub mod map;
pub mod tap;

/// Anything that can be viewed as an [`Observable`].
pub trait AsObservable {
    type Item;

    fn as_observable(&self) -> Observable<Self::Item>;
}

impl<T> AsObservable for Observable<T> {
    type Item = T;

    fn as_observable(&self) -> Observable<T> {
        self.clone()
    }
}

impl<T: ?Sized> RxExt for T where T: AsObservable {}
pub trait RxExt: AsObservable {
    fn map<U, F>(&self, transform: F) -> Observable<U>
    where
        Self::Item: 'static,
        U: 'static,
        F: Fn(Self::Item) -> U + 'static,
    {
        map::map(self.as_observable(), transform)
    }

    /// Maps with a fallible transform. The first `Err` ends the sequence with
    /// that error.
    fn try_map<U, F>(&self, transform: F) -> Observable<U>
    where
        Self::Item: 'static,
        U: 'static,
        F: Fn(Self::Item) -> Result<U, SharedError> + 'static,
    {
        map::try_map(self.as_observable(), transform)
    }

    /// Runs the side effects of `hooks` at the matching lifecycle points
    /// without touching the events themselves.
    fn tap(&self, hooks: Tap<Self::Item>) -> Observable<Self::Item>
    where
        Self::Item: 'static,
    {
        tap::tap(self.as_observable(), hooks)
    }

    /// Logs every event and lifecycle transition, using the caller's
    /// `file:line` as identifier.
    #[track_caller]
    fn debug(&self) -> Observable<Self::Item>
    where
        Self::Item: Debug + 'static,
    {
        let location = std::panic::Location::caller();

        debug::debug(
            self.as_observable(),
            format!("{}:{}", location.file(), location.line()),
        )
    }

    fn debug_named<I: Into<String>>(&self, identifier: I) -> Observable<Self::Item>
    where
        Self::Item: Debug + 'static,
    {
        debug::debug(self.as_observable(), identifier.into())
    }

    fn as_single(&self) -> Single<Self::Item>
    where
        Self::Item: 'static,
    {
        as_single::as_single(self.as_observable())
    }

    /// Subscribes right away and exposes the events as a `futures` stream.
    fn to_stream(&self) -> EventStream<Self::Item>
    where
        Self::Item: 'static,
    {
        EventStream::new(&self.as_observable())
    }
}
