use std::fmt;

use tracing::trace;

/// Receives change events from an observed object.
///
/// Any `FnMut(&E)` closure is a listener, so most callers never implement this
/// trait by hand.
pub trait ChangeListener<E> {
    fn on_change(&mut self, event: &E);
}

impl<E, F> ChangeListener<E> for F
where
    F: FnMut(&E),
{
    fn on_change(&mut self, event: &E) {
        self(event);
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Explicit listener registry owned by an observable object.
///
/// Listeners run synchronously, in subscription order, on the thread that
/// mutates the owner. A clone starts with no listeners.
pub struct ChangeNotifier<E> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn ChangeListener<E>>)>,
}

impl<E> ChangeNotifier<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl ChangeListener<E> + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        trace!(id = id.0, count = self.listeners.len(), "listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        trace!(id = id.0, removed, "listener unsubscribed");
        removed
    }

    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener.on_change(event);
        }
    }
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ChangeNotifier<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
