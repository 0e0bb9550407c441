use std::rc::Rc;

use thiserror::Error;

/// The opaque error value carried by [`Event::Error`](crate::Event::Error).
///
/// Producers pick their own error types; consumers recover them with
/// `downcast_ref`.
pub type SharedError = Rc<dyn std::error::Error>;

/// Errors raised by the operators of this crate itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RxError {
    #[error("range count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("range starting at {start} with count {count} overflows i64")]
    RangeOverflow { start: i64, count: i64 },

    #[error("sequence completed without an element")]
    NoElements,

    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    #[error("deferred factory subscribed to its own observable")]
    ReentrantFactory,
}

impl RxError {
    pub fn into_shared(self) -> SharedError {
        share_error(self)
    }
}

/// Wraps any error into a [`SharedError`].
pub fn share_error<E: std::error::Error + 'static>(error: E) -> SharedError {
    Rc::new(error)
}
