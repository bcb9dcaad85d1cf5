use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::Viewport;

pub type SubscriptionId = u64;

/// Listener invoked with the new viewport after each size change.
pub type ViewportListener = Box<dyn FnMut(Viewport)>;

/// Source of viewport size notifications, owned by the host environment.
///
/// Listeners run on the host's UI thread, one notification at a time.
pub trait ViewportProvider {
    fn current(&self) -> Viewport;
    fn subscribe(&self, listener: ViewportListener) -> SubscriptionId;
    /// Returns `true` when `id` was registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Default)]
struct ProviderInner {
    viewport: Viewport,
    next_id: SubscriptionId,
    /// Insertion order doubles as notification order.
    listeners: IndexMap<SubscriptionId, ViewportListener>,
    notifying: bool,
    removed_while_notifying: Vec<SubscriptionId>,
}

/// In-process provider a host drives by calling `resize`.
pub struct SharedViewportProvider {
    inner: RefCell<ProviderInner>,
}

impl SharedViewportProvider {
    #[must_use]
    pub fn new(viewport: Viewport) -> Rc<Self> {
        Rc::new(Self {
            inner: RefCell::new(ProviderInner {
                viewport,
                ..ProviderInner::default()
            }),
        })
    }

    /// Updates the viewport and notifies every listener in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe from inside the callback.
    pub fn resize(&self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.viewport == viewport {
                trace!(width, height, "viewport unchanged; skipping notification");
                return;
            }
            inner.viewport = viewport;
            inner.notifying = true;
            std::mem::take(&mut inner.listeners)
        };
        debug!(
            width,
            height,
            listeners = listeners.len(),
            "notify viewport listeners"
        );

        for listener in listeners.values_mut() {
            listener(viewport);
        }

        let mut inner = self.inner.borrow_mut();
        inner.notifying = false;
        for id in std::mem::take(&mut inner.removed_while_notifying) {
            listeners.shift_remove(&id);
        }
        let added = std::mem::replace(&mut inner.listeners, listeners);
        inner.listeners.extend(added);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ViewportProvider for SharedViewportProvider {
    fn current(&self) -> Viewport {
        self.inner.borrow().viewport
    }

    fn subscribe(&self, listener: ViewportListener) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, listener);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.listeners.shift_remove(&id).is_some() {
            return true;
        }
        if inner.notifying && id < inner.next_id {
            inner.removed_while_notifying.push(id);
            return true;
        }
        false
    }
}

impl fmt::Debug for SharedViewportProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SharedViewportProvider")
            .field("viewport", &inner.viewport)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Engine-side handle for one provider subscription.
///
/// Notifications are parked in a single slot until the engine drains them;
/// only the latest size matters. Dropping the handle unsubscribes.
pub(super) struct ViewportSubscription {
    provider: Rc<dyn ViewportProvider>,
    id: Option<SubscriptionId>,
    pending: Rc<Cell<Option<Viewport>>>,
}

impl ViewportSubscription {
    pub(super) fn attach(provider: Rc<dyn ViewportProvider>) -> Self {
        let pending = Rc::new(Cell::new(None));
        let slot = Rc::clone(&pending);
        let id = provider.subscribe(Box::new(move |viewport| slot.set(Some(viewport))));
        debug!(subscription = id, "subscribed to viewport provider");
        Self {
            provider,
            id: Some(id),
            pending,
        }
    }

    pub(super) fn current(&self) -> Viewport {
        self.provider.current()
    }

    pub(super) fn take_pending(&self) -> Option<Viewport> {
        self.pending.take()
    }

    pub(super) fn detach(&mut self) -> bool {
        match self.id.take() {
            Some(id) => {
                debug!(subscription = id, "unsubscribed from viewport provider");
                self.provider.unsubscribe(id)
            }
            None => false,
        }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("id", &self.id)
            .field("pending", &self.pending.get())
            .finish()
    }
}
