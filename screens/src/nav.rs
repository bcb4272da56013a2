//! Navigation service consumed by the screen controllers.
//!
//! # Design
//! Controllers only ever call `navigate`, `go_back`, and register focus
//! listeners; they never inspect the stack. `StackNavigator` is an in-memory
//! stack that fires the focus listeners of whichever route becomes active.
//! Listeners are invoked outside the internal locks so a callback may call
//! back into the navigator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::route::Route;

pub type FocusCallback = Box<dyn Fn() + Send + Sync>;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    fn go_back(&self);

    /// Calls `callback` every time `route` becomes the active screen, until
    /// the returned `Subscription` is dropped.
    fn add_focus_listener(&self, route: Route, callback: FocusCallback) -> Subscription;
}

/// Unregisters a focus listener when dropped.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

struct Listener {
    id: u64,
    route: Route,
    callback: Arc<dyn Fn() + Send + Sync>,
}

struct Inner {
    stack: Mutex<Vec<Route>>,
    listeners: Mutex<Vec<Listener>>,
    next_id: AtomicU64,
}

impl Inner {
    fn fire_focus(&self, route: &Route) {
        let callbacks: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .filter(|l| &l.route == route)
            .map(|l| Arc::clone(&l.callback))
            .collect();
        tracing::debug!(%route, listeners = callbacks.len(), "focus");
        for callback in callbacks {
            callback();
        }
    }
}

/// In-memory navigation stack.
#[derive(Clone)]
pub struct StackNavigator {
    inner: Arc<Inner>,
}

impl StackNavigator {
    pub fn new(root: Route) -> Self {
        Self {
            inner: Arc::new(Inner {
                stack: Mutex::new(vec![root]),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn current(&self) -> Route {
        // The root is never popped, so the stack is never empty.
        self.inner
            .stack
            .lock()
            .last()
            .cloned()
            .unwrap_or(Route::ItemsList)
    }

    pub fn stack(&self) -> Vec<Route> {
        self.inner.stack.lock().clone()
    }

    /// Fires focus for the active route, e.g. when the app starts or returns
    /// to the foreground.
    pub fn focus_current(&self) {
        self.inner.fire_focus(&self.current());
    }
}

impl Navigator for StackNavigator {
    fn navigate(&self, route: Route) {
        self.inner.stack.lock().push(route.clone());
        self.inner.fire_focus(&route);
    }

    fn go_back(&self) {
        let top = {
            let mut stack = self.inner.stack.lock();
            if stack.len() <= 1 {
                tracing::debug!("go_back at root ignored");
                return;
            }
            stack.pop();
            stack.last().cloned()
        };
        if let Some(route) = top {
            self.inner.fire_focus(&route);
        }
    }

    fn add_focus_listener(&self, route: Route, callback: FocusCallback) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push(Listener {
            id,
            route,
            callback: Arc::from(callback),
        });

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.lock().retain(|l| l.id != id);
            }
        })
    }
}
