//! Contract of the container that owns composites and persists them.
//!
//! The host raises load/save success events with the path it used. Listeners
//! register explicitly and receive a [`SubscriptionId`] they must hand back to
//! unsubscribe. Callbacks run synchronously on the emitting thread; the types
//! here are deliberately `!Send`.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::composite::CompositeRegistry;

/// Lifecycle events a host raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    LoadSuccess,
    SaveSuccess,
}

impl HostEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            HostEvent::LoadSuccess => "host.load_success",
            HostEvent::SaveSuccess => "host.save_success",
        }
    }
}

/// Handle returned from [`HostEvents::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type HostCallback = Rc<dyn Fn(&Path)>;

struct Subscription {
    id: SubscriptionId,
    event: HostEvent,
    callback: HostCallback,
}

/// Subscriber list for a host's lifecycle events
#[derive(Default)]
pub struct HostEvents {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Subscription>>,
}

impl HostEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, event: HostEvent, callback: impl Fn(&Path) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscription {
            id,
            event,
            callback: Rc::new(callback),
        });
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self, event: HostEvent) -> usize {
        self.subscribers.borrow().iter().filter(|s| s.event == event).count()
    }

    /// Invoke every callback registered for `event`, in subscription order.
    /// Returns the number of callbacks invoked.
    pub fn emit(&self, event: HostEvent, path: &Path) -> usize {
        // Snapshot so callbacks may subscribe or unsubscribe while running.
        let callbacks: Vec<HostCallback> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.event == event)
            .map(|s| Rc::clone(&s.callback))
            .collect();

        debug!(event = event.as_str(), path = %path.display(), listeners = callbacks.len(), "Emitting host event");
        for callback in &callbacks {
            callback(path);
        }
        callbacks.len()
    }
}

impl std::fmt::Debug for HostEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEvents")
            .field("load_subscribers", &self.subscriber_count(HostEvent::LoadSuccess))
            .field("save_subscribers", &self.subscriber_count(HostEvent::SaveSuccess))
            .finish()
    }
}

/// The container a name overlay and resolver attach to
pub trait HostContainer {
    /// Path the container was last loaded from or saved to.
    fn file_path(&self) -> PathBuf;

    /// Composites defined in the container.
    fn composites(&self) -> &dyn CompositeRegistry;

    fn events(&self) -> &HostEvents;
}
