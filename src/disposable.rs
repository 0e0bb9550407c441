pub mod dispose_bag;

use std::{
    cell::{Cell, RefCell},
    fmt, mem,
    rc::Rc,
};

use dispose_bag::DisposeBag;

enum Resource {
    Action(RefCell<Option<Box<dyn FnOnce()>>>),
    Composite(CompositeDisposable),
}

struct Inner {
    is_disposed: Cell<bool>,
    resource: Resource,
}

/// A revocable cleanup handle.
///
/// Clones share the same state, so disposing any clone disposes all of them.
/// Disposing more than once is a no-op.
#[derive(Clone)]
#[must_use = "dropping a Disposable does not dispose it, call `dispose` or `disposed_by`"]
pub struct Disposable {
    inner: Rc<Inner>,
}

impl Disposable {
    /// Runs `action` on the first call to [`dispose`](Self::dispose).
    pub fn new<F: FnOnce() + 'static>(action: F) -> Self {
        Self::from_resource(Resource::Action(RefCell::new(Some(Box::new(action)))))
    }

    pub fn empty() -> Self {
        Self::from_resource(Resource::Action(RefCell::new(None)))
    }

    fn from_resource(resource: Resource) -> Self {
        Self {
            inner: Rc::new(Inner {
                is_disposed: Cell::new(false),
                resource,
            }),
        }
    }

    pub fn dispose(&self) {
        if self.inner.is_disposed.replace(true) {
            return;
        }

        match &self.inner.resource {
            Resource::Action(action) => {
                let action = action.borrow_mut().take();

                if let Some(action) = action {
                    action();
                }
            }
            Resource::Composite(composite) => composite.dispose(),
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed.get()
    }

    /// Hands ownership to `bag`, which disposes this handle on teardown.
    pub fn disposed_by(self, bag: &DisposeBag) {
        bag.insert(self);
    }
}

impl From<CompositeDisposable> for Disposable {
    fn from(composite: CompositeDisposable) -> Self {
        Self::from_resource(Resource::Composite(composite))
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("is_disposed", &self.is_disposed())
            .finish()
    }
}

struct CompositeInner {
    is_disposed: Cell<bool>,
    items: RefCell<Vec<Disposable>>,
}

/// An ordered group of [`Disposable`]s that are disposed together.
#[derive(Clone)]
pub struct CompositeDisposable {
    inner: Rc<CompositeInner>,
}

impl CompositeDisposable {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(CompositeInner {
                is_disposed: Cell::new(false),
                items: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Adds `disposable` to the group, or disposes it right away when the
    /// group itself is already disposed.
    pub fn add(&self, disposable: Disposable) {
        if self.is_disposed() {
            disposable.dispose();
        } else {
            self.inner.items.borrow_mut().push(disposable);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispose(&self) {
        if self.inner.is_disposed.replace(true) {
            return;
        }

        let items = mem::take(&mut *self.inner.items.borrow_mut());

        for item in items {
            item.dispose();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed.get()
    }
}

impl Default for CompositeDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Disposable> for CompositeDisposable {
    fn from_iter<I: IntoIterator<Item = Disposable>>(items: I) -> Self {
        let composite = Self::new();

        for item in items {
            composite.add(item);
        }

        composite
    }
}
