use std::fmt;

use crate::SharedError;

/// A single notification of an observable sequence.
///
/// `Error` and `Completed` are terminal: nothing follows them.
#[derive(Debug, Clone)]
pub enum Event<T> {
    Next(T),
    Error(SharedError),
    Completed,
}

impl<T> Event<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Event::Next(_))
    }

    pub fn element(&self) -> Option<&T> {
        match self {
            Event::Next(it) => Some(it),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<T> {
        match self {
            Event::Next(it) => Some(it),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SharedError> {
        match self {
            Event::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Event<U> {
        match self {
            Event::Next(it) => Event::Next(f(it)),
            Event::Error(error) => Event::Error(error),
            Event::Completed => Event::Completed,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Next(it) => write!(f, "next({it:?})"),
            Event::Error(error) => write!(f, "error({error})"),
            Event::Completed => f.write_str("completed"),
        }
    }
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Next(l0), Self::Next(r0)) => l0 == r0,
            (Self::Error(l0), Self::Error(r0)) => l0.to_string() == r0.to_string(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}
