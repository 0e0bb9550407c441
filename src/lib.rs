pub mod disposable;
pub mod error;
pub mod observable;
pub mod observable_ext;
pub mod single;

#[cfg(test)]
pub(crate) mod testing;

pub use disposable::{dispose_bag::DisposeBag, CompositeDisposable, Disposable};
pub use error::{share_error, RxError, SharedError};
pub use observable::{event::Event, observer::Observer, subscriber::Subscriber, Observable};
pub use observable_ext::{into_stream::EventStream, tap::Tap, AsObservable, RxExt};
pub use single::{Single, SingleEmitter, SingleResult};

pub mod prelude {
    pub use crate::disposable::*;
    pub use crate::disposable::dispose_bag::*;
    pub use crate::error::*;
    pub use crate::observable::event::*;
    pub use crate::observable::observer::*;
    pub use crate::observable::subscriber::*;
    pub use crate::observable::*;
    pub use crate::observable_ext::into_stream::*;
    pub use crate::observable_ext::tap::*;
    pub use crate::observable_ext::*;
    pub use crate::single::*;
}
