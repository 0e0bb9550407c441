use std::{
    cell::{RefCell, RefMut},
    rc::Rc,
};

use tracing::trace;

use crate::{Disposable, Event, Observable, Observer, SharedError};

type Hook = Option<RefCell<Box<dyn FnMut()>>>;

/// Side-effect hooks for the [`tap`](crate::RxExt::tap) operator.
///
/// Hooks may keep state across calls. A hook that ends up triggering itself
/// is skipped for the nested call.
pub struct Tap<T> {
    on_next: Option<RefCell<Box<dyn FnMut(&T)>>>,
    on_error: Option<RefCell<Box<dyn FnMut(&SharedError)>>>,
    on_completed: Hook,
    on_subscribe: Hook,
    on_subscribed: Hook,
    on_dispose: Hook,
}

impl<T> Default for Tap<T> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
            on_subscribe: None,
            on_subscribed: None,
            on_dispose: None,
        }
    }
}

impl<T> Tap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_next<F: FnMut(&T) + 'static>(mut self, f: F) -> Self {
        self.on_next = Some(RefCell::new(Box::new(f)));
        self
    }

    pub fn on_error<F: FnMut(&SharedError) + 'static>(mut self, f: F) -> Self {
        self.on_error = Some(RefCell::new(Box::new(f)));
        self
    }

    pub fn on_completed<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_completed = Some(RefCell::new(Box::new(f)));
        self
    }

    /// Runs before the upstream is subscribed.
    pub fn on_subscribe<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_subscribe = Some(RefCell::new(Box::new(f)));
        self
    }

    /// Runs once the upstream subscribe call has returned.
    pub fn on_subscribed<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_subscribed = Some(RefCell::new(Box::new(f)));
        self
    }

    pub fn on_dispose<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.on_dispose = Some(RefCell::new(Box::new(f)));
        self
    }

    fn notify(&self, event: &Event<T>) {
        match event {
            Event::Next(it) => {
                if let Some(mut on_next) = borrow(&self.on_next) {
                    (&mut **on_next)(it);
                }
            }
            Event::Error(error) => {
                if let Some(mut on_error) = borrow(&self.on_error) {
                    (&mut **on_error)(error);
                }
            }
            Event::Completed => run(&self.on_completed),
        }
    }
}

fn borrow<F: ?Sized>(hook: &Option<RefCell<Box<F>>>) -> Option<RefMut<'_, Box<F>>> {
    let hook = hook.as_ref()?.try_borrow_mut();

    if hook.is_err() {
        trace!("skipping reentrant tap hook");
    }

    hook.ok()
}

fn run(hook: &Hook) {
    if let Some(mut hook) = borrow(hook) {
        (&mut **hook)();
    }
}

pub(crate) fn tap<T: 'static>(source: Observable<T>, hooks: Tap<T>) -> Observable<T> {
    let hooks = Rc::new(hooks);

    Observable::create(move |observer: Observer<T>| {
        run(&hooks.on_subscribe);

        let downstream = observer.clone();
        let event_hooks = Rc::clone(&hooks);
        let upstream = source.subscribe_observer(observer.chain(move |event: Event<T>| {
            event_hooks.notify(&event);
            downstream.on(event);
        }));

        run(&hooks.on_subscribed);

        let dispose_hooks = Rc::clone(&hooks);

        Disposable::new(move || {
            run(&dispose_hooks.on_dispose);
            upstream.dispose();
        })
    })
}
